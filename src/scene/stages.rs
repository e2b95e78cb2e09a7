//! Hand-authored compositions, one per stage, laid out on a 640x400 design surface.
//!
//! Nothing here is computed from a real model; every feature, token and answer is an
//! illustrative fixture.

use crate::{
    animation::ease::Ease,
    animation::stagger::Stagger,
    animation::tween::Timing,
    content::stage::StageId,
    foundation::core::{Point, Rgba8Premul},
    foundation::error::ExplainerResult,
    scene::dsl::{ElementBuilder, GroupBuilder, SceneBuilder, pulse, repeat},
    scene::model::{ElementKind, LoopProperty, SceneDescriptor, VisualState},
};

/// Answer revealed by the typewriter on the inference stage.
pub const INFERENCE_ANSWER: &str = "这是一只黑色的拉布拉多犬。它正看着镜头，表情看起来很温顺。";

const GRID: u32 = 4;
const PATCH_COUNT: u32 = GRID * GRID;

fn hex(s: &str) -> ExplainerResult<Rgba8Premul> {
    Rgba8Premul::from_hex(s)
}

/// Row-major grid cell center for patch `i`, `pitch` pixels apart around `center`.
fn grid_cell(center: Point, pitch: f64, i: u32) -> Point {
    let col = f64::from(i % GRID) - 1.5;
    let row = f64::from(i / GRID) - 1.5;
    Point::new(center.x + col * pitch, center.y + row * pitch)
}

fn caption(id: &str, origin: Point, text: &str, color: Rgba8Premul) -> ElementBuilder {
    ElementBuilder::new(
        id,
        ElementKind::Caption,
        origin,
        VisualState::boxed(0.0, 14.0, color),
    )
    .label(text)
}

pub(crate) fn intro() -> ExplainerResult<SceneDescriptor> {
    let image = VisualState::boxed(256.0, 256.0, hex("#334155")?).with_radius(8.0);
    let icon = |id: &str, x: f64, color: &str, label: &str| -> ExplainerResult<ElementBuilder> {
        let state = VisualState::boxed(48.0, 48.0, hex(color)?).with_radius(24.0);
        Ok(ElementBuilder::new(id, ElementKind::Icon, Point::new(x, 350.0), state)
            .from(state.with_opacity(0.0))
            .label(label))
    };

    SceneBuilder::new(StageId::Intro)
        .group(
            GroupBuilder::new("image", Timing::new(400)).element(
                ElementBuilder::new(
                    "input_image",
                    ElementKind::Image,
                    Point::new(320.0, 160.0),
                    image,
                )
                .from(image.with_scale(0.9).with_opacity(0.0))
                .label("Input"),
            ),
        )
        .group(
            GroupBuilder::new("pipeline", Timing::new(300).delayed(200))
                .stagger(Stagger::Linear { step_ms: 120 })
                .sequence([
                    icon("vision_encoder", 250.0, "#60a5fa", "Vision Encoder")?,
                    ElementBuilder::new(
                        "flow_arrow",
                        ElementKind::Icon,
                        Point::new(320.0, 350.0),
                        VisualState::boxed(24.0, 4.0, hex("#475569")?),
                    )
                    .from(VisualState::boxed(24.0, 4.0, hex("#475569")?).with_opacity(0.0)),
                    icon("llm", 390.0, "#4ade80", "LLM")?,
                ]),
        )
        .build()
}

pub(crate) fn patching() -> ExplainerResult<SceneDescriptor> {
    let tile = VisualState::boxed(78.0, 78.0, hex("#1e293b")?).with_radius(2.0);
    let center = Point::new(320.0, 180.0);
    let tiles = (0..PATCH_COUNT).map(|i| {
        let col = f64::from(i % GRID) - 1.5;
        let row = f64::from(i / GRID) - 1.5;
        ElementBuilder::new(
            format!("patch_{i}"),
            ElementKind::Tile,
            grid_cell(center, 80.0, i),
            tile.with_offset(col * 10.0, row * 10.0).with_scale(0.9),
        )
        .from(tile)
        .label(format!("P{}", i + 1))
    });

    SceneBuilder::new(StageId::Patching)
        .group(
            GroupBuilder::new("patches", Timing::new(400))
                .stagger(Stagger::Grid {
                    columns: GRID,
                    step_ms: 40,
                })
                .sequence(tiles),
        )
        .group(
            GroupBuilder::new("caption", Timing::new(300).delayed(1000)).element(
                caption(
                    "flatten_caption",
                    Point::new(320.0, 380.0),
                    "Flatten & Positional Encoding...",
                    hex("#93c5fd")?,
                )
                .from(VisualState::boxed(0.0, 14.0, hex("#93c5fd")?).with_opacity(0.0)),
            ),
        )
        .build()
}

pub(crate) fn encoder_clip() -> ExplainerResult<SceneDescriptor> {
    let patch = VisualState::boxed(64.0, 64.0, Rgba8Premul::transparent());
    let vector = VisualState::boxed(40.0, 12.0, hex("#60a5fa")?).with_radius(4.0);
    let center = Point::new(320.0, 120.0);
    let vectors = (0..PATCH_COUNT).map(|i| {
        ElementBuilder::new(
            format!("feature_{i}"),
            ElementKind::Bar,
            grid_cell(center, 56.0, i),
            vector,
        )
        .from(patch)
    });

    let chip = |id: &str, x: f64, color: &str, label: &str| -> ExplainerResult<ElementBuilder> {
        let state = VisualState::boxed(150.0, 24.0, hex(color)?).with_radius(12.0);
        Ok(ElementBuilder::new(id, ElementKind::Chip, Point::new(x, 360.0), state).label(label))
    };

    SceneBuilder::new(StageId::EncoderClip)
        .group(
            GroupBuilder::new("features", Timing::new(500).with_ease(Ease::InOutCubic))
                .stagger(Stagger::Linear { step_ms: 20 })
                .sequence(vectors),
        )
        .group(
            GroupBuilder::fixed("encoder")
                .element(
                    ElementBuilder::new(
                        "clip_panel",
                        ElementKind::Panel,
                        Point::new(320.0, 300.0),
                        VisualState::boxed(260.0, 56.0, hex("#1e293bcc")?).with_radius(12.0),
                    )
                    .label("CLIP Encoder")
                    .tooltip("Extracting Semantic Features..."),
                )
                .element(ElementBuilder::new(
                    "scanner",
                    ElementKind::Icon,
                    Point::new(220.0, 300.0),
                    VisualState::boxed(32.0, 32.0, hex("#c084fc")?),
                )),
        )
        .group(
            GroupBuilder::fixed("verdicts")
                .element(chip("matched", 240.0, "#22c55e33", "Matched: \"Black Dog\"")?)
                .element(chip("diff", 400.0, "#ef444433", "Diff: \"Salad\"")?),
        )
        .looping("scanner_pulse", "scanner", LoopProperty::Opacity, pulse(1.0, 0.5, 2000))
        .build()
}

pub(crate) fn projection() -> ExplainerResult<SceneDescriptor> {
    let raw = VisualState::boxed(64.0, 8.0, hex("#3b82f6")?)
        .with_opacity(0.5)
        .with_radius(2.0);
    let blue = VisualState::boxed(96.0, 12.0, hex("#3b82f6")?).with_radius(2.0);
    let pink = blue.with_color(hex("#ec4899")?);

    let mut raw_bars = GroupBuilder::fixed("vit_output");
    for i in 0..8u32 {
        let y = 130.0 + f64::from(i) * 12.0;
        raw_bars = raw_bars.element(ElementBuilder::new(
            format!("raw_{i}"),
            ElementKind::Bar,
            Point::new(150.0, y),
            raw,
        ));
    }
    raw_bars = raw_bars.element(caption(
        "vit_caption",
        Point::new(150.0, 250.0),
        "ViT Output (1024 dim)",
        hex("#60a5fa")?,
    ));

    let projected = (0..8u32).map(|i| {
        let y = 124.0 + f64::from(i) * 16.0;
        ElementBuilder::new(format!("embed_{i}"), ElementKind::Bar, Point::new(480.0, y), pink)
            .from(blue)
    });

    SceneBuilder::new(StageId::Projection)
        .group(raw_bars)
        .group(
            GroupBuilder::fixed("projector")
                .element(
                    ElementBuilder::new(
                        "projector_box",
                        ElementKind::Panel,
                        Point::new(300.0, 180.0),
                        VisualState::boxed(128.0, 192.0, hex("#831843")?)
                            .with_opacity(0.25)
                            .with_radius(8.0),
                    )
                    .label("Projector (MLP)"),
                )
                .element(ElementBuilder::new(
                    "projector_arrow",
                    ElementKind::Icon,
                    Point::new(395.0, 180.0),
                    VisualState::boxed(24.0, 24.0, hex("#64748b")?),
                )),
        )
        .group(
            GroupBuilder::new("llm_embedding", Timing::new(400))
                .sequence(projected)
                .element(caption(
                    "embed_caption",
                    Point::new(480.0, 262.0),
                    "LLM Embedding (4096 dim)",
                    hex("#f472b6")?,
                )),
        )
        .looping("arrow_pulse", "projector_arrow", LoopProperty::Opacity, pulse(1.0, 0.5, 2000))
        .looping("shimmer", "llm_embedding", LoopProperty::Shimmer, repeat(-1.0, 1.0, 2000))
        .build()
}

pub(crate) fn tokens() -> ExplainerResult<SceneDescriptor> {
    let chip = VisualState::boxed(40.0, 40.0, hex("#db277733")?).with_radius(4.0);
    let visual = (0..8u32).map(|i| {
        let x = 320.0 + (f64::from(i) - 3.5) * 48.0;
        let feature = if i % 2 == 0 { "Fur Texture" } else { "Ear Shape" };
        ElementBuilder::new(format!("img_token_{i}"), ElementKind::Chip, Point::new(x, 170.0), chip)
            .from(chip.with_scale(0.0))
            .label("IMG")
            .tooltip(format!("Feature: {feature}"))
    });

    let text_chip = chip.with_color(hex("#05966933")?);
    let text = ["<sep>", "这", "是", "什", "么", "?"]
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            let x = 320.0 + (i as f64 - 2.5) * 48.0;
            ElementBuilder::new(
                format!("text_token_{i}"),
                ElementKind::Chip,
                Point::new(x, 226.0),
                text_chip,
            )
            .from(text_chip.with_scale(0.0))
            .label(t)
        });

    SceneBuilder::new(StageId::Tokens)
        .group(GroupBuilder::fixed("heading").element(caption(
            "sequence_caption",
            Point::new(320.0, 110.0),
            "Input Sequence to LLM",
            hex("#cbd5e1")?,
        )))
        .group(
            GroupBuilder::new("visual_tokens", Timing::new(300))
                .stagger(Stagger::Linear { step_ms: 100 })
                .sequence(visual),
        )
        .group(
            GroupBuilder::new("text_tokens", Timing::new(300).delayed(1000))
                .stagger(Stagger::Linear { step_ms: 100 })
                .sequence(text),
        )
        .group(GroupBuilder::fixed("note").element(caption(
            "drift_note",
            Point::new(320.0, 320.0),
            "Visual Tokens drift in vector space between concepts like \
             \"Dog\", \"Black\", \"Animal\".",
            hex("#94a3b8")?,
        )))
        .build()
}

pub(crate) fn inference() -> ExplainerResult<SceneDescriptor> {
    let brain_at = Point::new(320.0, 90.0);
    let line = |id: &str, dx: f64, color: &str| -> ExplainerResult<ElementBuilder> {
        let state = VisualState::boxed(dx, 80.0, hex(color)?).with_opacity(0.4);
        Ok(ElementBuilder::new(id, ElementKind::Line, brain_at, state))
    };
    let context = |id: &str, x: f64, width: f64, color: &str| -> ExplainerResult<ElementBuilder> {
        let state = VisualState::boxed(width, 8.0, hex(color)?)
            .with_opacity(0.5)
            .with_radius(4.0);
        Ok(ElementBuilder::new(id, ElementKind::Bar, Point::new(x, 215.0), state))
    };

    SceneBuilder::new(StageId::Inference)
        .group(
            GroupBuilder::fixed("brain")
                .element(ElementBuilder::new(
                    "brain_glow",
                    ElementKind::Panel,
                    brain_at,
                    VisualState::boxed(120.0, 120.0, hex("#22c55e33")?).with_radius(60.0),
                ))
                .element(
                    ElementBuilder::new(
                        "brain",
                        ElementKind::Icon,
                        brain_at,
                        VisualState::boxed(80.0, 80.0, hex("#34d399")?),
                    )
                    .label("LLM"),
                )
                .element(line("attention_visual", -100.0, "#ec4899")?)
                .element(line("attention_text", 100.0, "#10b981")?),
        )
        .group(
            GroupBuilder::fixed("context_window")
                .element(context("ctx_visual_a", 236.0, 80.0, "#ec4899")?)
                .element(context("ctx_visual_b", 324.0, 80.0, "#ec4899")?)
                .element(context("ctx_question", 436.0, 128.0, "#10b981")?),
        )
        .group(
            GroupBuilder::fixed("generation")
                .element(
                    ElementBuilder::new(
                        "answer_panel",
                        ElementKind::Panel,
                        Point::new(320.0, 310.0),
                        VisualState::boxed(448.0, 88.0, hex("#0f172a")?).with_radius(12.0),
                    )
                    .label("AI: "),
                )
                .element(caption(
                    "answer",
                    Point::new(112.0, 318.0),
                    "",
                    hex("#d1fae5")?,
                ))
                .element(ElementBuilder::new(
                    "answer_cursor",
                    ElementKind::Cursor,
                    Point::new(540.0, 310.0),
                    VisualState::boxed(6.0, 16.0, hex("#34d399")?),
                )),
        )
        .looping("glow_pulse", "brain_glow", LoopProperty::Opacity, pulse(1.0, 0.4, 3000))
        .looping(
            "dash_visual",
            "attention_visual",
            LoopProperty::DashOffset,
            repeat(0.0, -20.0, 1000),
        )
        .looping(
            "dash_text",
            "attention_text",
            LoopProperty::DashOffset,
            repeat(0.0, -20.0, 1000),
        )
        .looping("cursor_blink", "answer_cursor", LoopProperty::Opacity, pulse(1.0, 0.5, 2000))
        .typewriter("answer", INFERENCE_ANSWER)
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/stages.rs"]
mod tests;
