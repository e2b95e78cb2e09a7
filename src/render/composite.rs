use crate::foundation::core::Rgba8Premul;

/// Undo premultiplication for encoders and paints that expect straight alpha.
pub fn unpremultiply(px: Rgba8Premul) -> [u8; 4] {
    if px.a == 0 {
        return [0, 0, 0, 0];
    }
    let a = u32::from(px.a);
    let straight = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
    [straight(px.r), straight(px.g), straight(px.b), px.a]
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
