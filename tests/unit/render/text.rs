use super::*;
use crate::{
    app::explainer::Explainer,
    content::stage::StageId,
    foundation::core::TimeMs,
    foundation::settings::ExplainerSettings,
};

fn panel(ex: &mut Explainer, now: TimeMs, elements: bool) -> String {
    let view = ex.render(now).unwrap();
    let mut renderer = TextPanelRenderer::new(Vec::new()).with_elements(elements);
    renderer.paint(&view).unwrap();
    String::from_utf8(renderer.into_inner()).unwrap()
}

#[test]
fn intro_panel_shows_header_text_and_controls() {
    let mut ex = Explainer::new(ExplainerSettings::default(), TimeMs(0)).unwrap();
    let text = panel(&mut ex, TimeMs(0), false);
    let first = text.lines().next().unwrap();
    assert!(first.starts_with("LLM Vision Explainer | STEP 1 OF 6 ["));
    assert!(first.ends_with("] 17%"));
    assert!(text.contains("多模态大模型：从像素到语义"));
    assert!(text.contains("  * 点击“下一步”开始探索 LLM 视觉识别的全过程。"));
    assert!(text.contains("scene intro t=0ms"));
    assert!(text.ends_with("( Previous ) [Next Step >]\n"));
}

#[test]
fn last_stage_disables_next_and_shows_typewriter() {
    let mut ex = Explainer::new(ExplainerSettings::default(), TimeMs(0)).unwrap();
    ex.on_jump(StageId::Inference.index(), TimeMs(0));
    let text = panel(&mut ex, TimeMs(100), false);
    assert!(text.contains("STEP 6 OF 6 [########################] 100%"));
    assert!(text.contains("  > 这是  (2/"));
    assert!(text.ends_with("[< Previous] ( Finish )\n"));
}

#[test]
fn element_listing_is_optional() {
    let mut ex = Explainer::new(ExplainerSettings::default(), TimeMs(0)).unwrap();
    assert!(!panel(&mut ex, TimeMs(0), false).contains("input_image"));
    assert!(panel(&mut ex, TimeMs(0), true).contains("input_image"));
}
