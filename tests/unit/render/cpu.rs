use super::*;
use crate::{
    app::explainer::Explainer,
    content::stage::StageId,
    content::table::ContentTable,
    foundation::core::{Canvas, Rgba8Premul, TimeMs},
    navigation::state::NavigationState,
    render::font::locate_font,
    scene::model::VisualState,
    sequencer::live::SceneFrame,
};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn red() -> Rgba8Premul {
    Rgba8Premul::from_straight_rgba(255, 0, 0, 255)
}

fn settings() -> ExplainerSettings {
    ExplainerSettings {
        canvas: Canvas {
            width: 20,
            height: 20,
        },
        clear_rgba: BLACK,
        ..ExplainerSettings::default()
    }
}

fn px(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = (y as usize * frame.width as usize + x as usize) * 4;
    [frame.data[i], frame.data[i + 1], frame.data[i + 2], frame.data[i + 3]]
}

fn element(kind: ElementKind, origin: Point, state: VisualState) -> ElementFrame {
    ElementFrame {
        id: "e".to_string(),
        group: "g".to_string(),
        kind,
        label: None,
        tooltip: None,
        origin,
        state,
        progress: 1.0,
    }
}

fn paint(elements: Vec<ElementFrame>, opacity: f64) -> FrameRGBA {
    let content = ContentTable::load().unwrap();
    let nav = NavigationState::default();
    let frame = SceneFrame {
        stage: nav.current,
        elapsed_ms: 0,
        opacity,
        elements,
        loops: Vec::new(),
        typewriter: None,
        settled: true,
    };
    let view = View::new(nav, content.lookup(nav.current), frame);
    let mut raster = CpuRasterizer::with_text(&settings(), None).unwrap();
    raster.paint(&view).unwrap();
    raster.take_frame().unwrap()
}

#[test]
fn empty_scene_is_clear_colour() {
    let frame = paint(Vec::new(), 1.0);
    assert_eq!((frame.width, frame.height), (20, 20));
    assert_eq!(frame.data.len(), 20 * 20 * 4);
    assert!(frame.data.chunks_exact(4).all(|p| p == BLACK));
}

#[test]
fn box_is_centered_on_its_origin() {
    let state = VisualState::boxed(4.0, 4.0, red());
    let frame = paint(vec![element(ElementKind::Bar, Point::new(10.0, 10.0), state)], 1.0);
    assert_eq!(px(&frame, 8, 8), RED);
    assert_eq!(px(&frame, 11, 11), RED);
    assert_eq!(px(&frame, 12, 12), BLACK);
    assert_eq!(px(&frame, 7, 10), BLACK);
}

#[test]
fn offset_and_scale_move_the_box() {
    let state = VisualState::boxed(2.0, 2.0, red())
        .with_offset(5.0, 0.0)
        .with_scale(2.0);
    let frame = paint(vec![element(ElementKind::Tile, Point::new(5.0, 5.0), state)], 1.0);
    assert_eq!(px(&frame, 8, 4), RED);
    assert_eq!(px(&frame, 5, 5), BLACK);
}

#[test]
fn rounded_corners_leave_the_corner_pixel_clear() {
    let state = VisualState::boxed(12.0, 12.0, red()).with_radius(6.0);
    let frame = paint(vec![element(ElementKind::Icon, Point::new(10.0, 10.0), state)], 1.0);
    assert_eq!(px(&frame, 10, 10), RED);
    assert_eq!(px(&frame, 4, 4), BLACK);
}

#[test]
fn scene_fade_scales_element_opacity() {
    let state = VisualState::boxed(4.0, 4.0, red());
    let frame = paint(vec![element(ElementKind::Bar, Point::new(10.0, 10.0), state)], 0.5);
    let [r, g, _, a] = px(&frame, 10, 10);
    assert!((120..=135).contains(&r), "r = {r}");
    assert_eq!(g, 0);
    assert_eq!(a, 255);
}

#[test]
fn invisible_elements_are_skipped() {
    let state = VisualState::boxed(4.0, 4.0, red()).with_opacity(0.0);
    let frame = paint(vec![element(ElementKind::Bar, Point::new(10.0, 10.0), state)], 1.0);
    assert_eq!(px(&frame, 10, 10), BLACK);
}

#[test]
fn line_is_stroked_from_origin_along_size() {
    let state = VisualState::boxed(10.0, 0.0, red());
    let frame = paint(vec![element(ElementKind::Line, Point::new(5.0, 10.0), state)], 1.0);
    assert_eq!(px(&frame, 6, 10), RED);
    assert_eq!(px(&frame, 14, 9), RED);
    assert_eq!(px(&frame, 10, 13), BLACK);
    assert_eq!(px(&frame, 17, 10), BLACK);
}

#[test]
fn boxes_outside_the_canvas_are_clipped() {
    let state = VisualState::boxed(10.0, 10.0, red());
    let frame = paint(vec![element(ElementKind::Panel, Point::new(-20.0, 40.0), state)], 1.0);
    assert!(frame.data.chunks_exact(4).all(|p| p == BLACK));
}

#[test]
fn canvas_wider_than_u16_is_rejected() {
    let wide = ExplainerSettings {
        canvas: Canvas {
            width: 70_000,
            height: 10,
        },
        ..ExplainerSettings::default()
    };
    let err = CpuRasterizer::with_text(&wide, None).unwrap_err();
    assert!(matches!(err, ExplainerError::Validation(_)));
}

#[test]
fn missing_configured_font_is_an_error() {
    let s = ExplainerSettings {
        font_path: Some(std::path::PathBuf::from("target/no_such_font.ttf")),
        ..settings()
    };
    let err = CpuRasterizer::new(&s).unwrap_err();
    assert!(matches!(err, ExplainerError::Validation(_)));
}

#[test]
fn typewriter_answer_is_drawn_with_a_local_font_if_present() {
    let Ok(Some(path)) = locate_font(None) else {
        return;
    };
    let settings = ExplainerSettings::default();
    let mut ex = Explainer::new(settings.clone(), TimeMs(0)).unwrap();
    ex.on_jump(StageId::Inference.index(), TimeMs(0));
    let view = ex.render(TimeMs(60_000)).unwrap();
    assert!(!view.frame.typewriter.as_ref().unwrap().text.is_empty());

    let engine = TextLayoutEngine::from_file(&path).unwrap();
    let mut with_text = CpuRasterizer::with_text(&settings, Some(engine)).unwrap();
    assert!(with_text.draws_text());
    with_text.paint(&view).unwrap();
    let mut shapes_only = CpuRasterizer::with_text(&settings, None).unwrap();
    shapes_only.paint(&view).unwrap();

    let text = with_text.take_frame().unwrap();
    let bare = shapes_only.take_frame().unwrap();
    // Answer row, left of the blinking cursor.
    let inked = (306..330)
        .flat_map(|y| (112..530).map(move |x| (x, y)))
        .filter(|&(x, y)| px(&text, x, y) != px(&bare, x, y))
        .count();
    assert!(inked > 100, "only {inked} answer pixels inked");
}
