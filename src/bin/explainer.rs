use std::{
    io::{BufRead as _, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vision_explainer::{
    Clock as _, CpuRasterizer, Explainer, ExplainerSettings, ManualClock, RenderBackend as _,
    STAGE_COUNT, StageId, SystemClock, TextPanelRenderer, TimeMs,
};

#[derive(Parser, Debug)]
#[command(
    name = "explainer",
    version,
    about = "How a multimodal LLM sees an image, stage by stage"
)]
struct Cli {
    /// Settings JSON; a missing file means defaults.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the stages.
    Stages,
    /// Print the view of one stage at a moment after entering it.
    Show(ShowArgs),
    /// Rasterize one stage at a moment after entering it as a PNG.
    Frame(FrameArgs),
    /// Run a scripted navigation on a virtual clock, printing each view.
    Play(PlayArgs),
    /// Navigate interactively from stdin on the wall clock.
    Tour,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Stage index (0-based) or key, e.g. `2` or `encoder_clip`.
    #[arg(long, default_value = "0")]
    stage: String,

    /// Milliseconds since the stage was entered.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Emit the view as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// List every element in the text output.
    #[arg(long)]
    elements: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Stage index (0-based) or key.
    #[arg(long, default_value = "0")]
    stage: String,

    /// Milliseconds since the stage was entered.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Font for labels, overriding `font_path` from the settings.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Whitespace-separated commands: `n` next, `p` previous, `jN` jump to N, `r` replay,
    /// `wMS` wait MS milliseconds.
    #[arg(long)]
    script: String,

    /// Virtual time that passes after each navigation command.
    #[arg(long, default_value_t = 250)]
    step_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Next,
    Previous,
    Jump(usize),
    Replay,
    Wait(u64),
    Quit,
}

fn parse_input(token: &str) -> anyhow::Result<Input> {
    let token = token.trim();
    let input = match token {
        "n" | "next" => Input::Next,
        "p" | "prev" | "previous" => Input::Previous,
        "r" | "replay" => Input::Replay,
        "q" | "quit" => Input::Quit,
        _ => {
            if let Some(rest) = token.strip_prefix('j') {
                Input::Jump(rest.parse().with_context(|| format!("bad jump '{token}'"))?)
            } else if let Some(rest) = token.strip_prefix('w') {
                Input::Wait(rest.parse().with_context(|| format!("bad wait '{token}'"))?)
            } else if let Ok(index) = token.parse::<usize>() {
                Input::Jump(index)
            } else {
                anyhow::bail!("unknown command '{token}'");
            }
        }
    };
    Ok(input)
}

fn apply(explainer: &mut Explainer, input: Input, now: TimeMs) {
    match input {
        Input::Next => {
            explainer.on_next(now);
        }
        Input::Previous => {
            explainer.on_previous(now);
        }
        Input::Jump(index) => {
            if index >= STAGE_COUNT {
                eprintln!("no stage {index}; valid stages are 0..{}", STAGE_COUNT - 1);
            }
            explainer.on_jump(index, now);
        }
        Input::Replay => explainer.replay(now),
        Input::Wait(_) | Input::Quit => {}
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> anyhow::Result<ExplainerSettings> {
    let Some(path) = path else {
        return Ok(ExplainerSettings::default());
    };
    ExplainerSettings::load(path).with_context(|| format!("load settings '{}'", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let settings = load_settings(cli.settings.as_ref())?;
    match cli.cmd {
        Command::Stages => cmd_stages(settings),
        Command::Show(args) => cmd_show(settings, args),
        Command::Frame(args) => cmd_frame(settings, args),
        Command::Play(args) => cmd_play(settings, args),
        Command::Tour => cmd_tour(settings),
    }
}

/// Explainer positioned on `stage`, entered at time zero.
fn explainer_at(settings: ExplainerSettings, stage: &str) -> anyhow::Result<Explainer> {
    let id = StageId::parse(stage)?;
    let mut explainer = Explainer::new(settings, TimeMs(0)).context("start explainer")?;
    explainer.on_jump(id.index(), TimeMs(0));
    Ok(explainer)
}

fn cmd_stages(settings: ExplainerSettings) -> anyhow::Result<()> {
    let explainer = Explainer::new(settings, TimeMs(0)).context("start explainer")?;
    let mut out = std::io::stdout().lock();
    for stage in explainer.content().iter() {
        writeln!(out, "{} {:<13} {}", stage.id.index(), stage.id.key(), stage.title)?;
    }
    Ok(())
}

fn cmd_show(settings: ExplainerSettings, args: ShowArgs) -> anyhow::Result<()> {
    let mut explainer = explainer_at(settings, &args.stage)?;
    let view = explainer.render(TimeMs(args.at_ms))?;
    if args.json {
        let json = serde_json::to_string_pretty(&view).context("serialize view")?;
        println!("{json}");
        return Ok(());
    }
    let mut panel = TextPanelRenderer::new(std::io::stdout().lock()).with_elements(args.elements);
    panel.paint(&view)?;
    Ok(())
}

fn cmd_frame(mut settings: ExplainerSettings, args: FrameArgs) -> anyhow::Result<()> {
    if let Some(font) = args.font {
        settings.font_path = Some(font);
    }
    let mut raster = CpuRasterizer::new(&settings)?;
    let mut explainer = explainer_at(settings, &args.stage)?;
    let view = explainer.render(TimeMs(args.at_ms))?;
    raster.paint(&view)?;
    let frame = raster
        .last_frame()
        .context("rasterizer produced no frame")?;
    frame.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(settings: ExplainerSettings, args: PlayArgs) -> anyhow::Result<()> {
    let inputs = args
        .script
        .split_whitespace()
        .map(parse_input)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let clock = ManualClock::new(TimeMs(0));
    let mut explainer = Explainer::new(settings, clock.now()).context("start explainer")?;
    let mut panel = TextPanelRenderer::new(std::io::stdout());

    for input in inputs {
        if input == Input::Quit {
            break;
        }
        apply(&mut explainer, input, clock.now());
        let now = match input {
            Input::Wait(ms) => clock.advance(ms),
            _ => clock.advance(args.step_ms),
        };
        let view = explainer.render(now)?;
        panel.paint(&view)?;
        println!();
    }
    if explainer.stale_dispatches() > 0 {
        anyhow::bail!(
            "{} timed task(s) fired after their scene was replaced",
            explainer.stale_dispatches()
        );
    }
    Ok(())
}

fn cmd_tour(settings: ExplainerSettings) -> anyhow::Result<()> {
    let clock = SystemClock::new();
    let mut explainer = Explainer::new(settings, clock.now()).context("start explainer")?;
    let mut panel = TextPanelRenderer::new(std::io::stdout());
    panel.paint(&explainer.render(clock.now())?)?;
    eprintln!("commands: n, p, <index>, r, q (empty line refreshes)");

    for line in std::io::stdin().lock().lines() {
        let line = line.context("read stdin")?;
        let input = if line.trim().is_empty() {
            Input::Wait(0)
        } else {
            match parse_input(&line) {
                Ok(input) => input,
                Err(err) => {
                    eprintln!("{err:#}");
                    continue;
                }
            }
        };
        if input == Input::Quit {
            break;
        }
        apply(&mut explainer, input, clock.now());
        panel.paint(&explainer.render(clock.now())?)?;
    }
    Ok(())
}
