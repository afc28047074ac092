use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use crossterm::terminal;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use mozart::audio::{FilterKind, Patch, RecordingSink, Source, concatenate};
use mozart::loader;
use mozart::middle::Middle;
use mozart::pipeline::{
    Catalog, DEFAULT_BARS, PartType, RenderedTrack, format_duration, persistence,
};
use mozart::sequencer::{
    BackingTrackRequest, BeatPlayer, CpalBackend, RenderPlan, RenderSettings, SystemClock,
};
use mozart::shared::DEFAULT_SAMPLE_RATE;
use mozart::tui;

#[derive(Parser)]
#[command(name = "mozart", version, about = "Genre backing tracks, live preview and vocal assembly")]
struct Cli {
    /// Genre catalog to use instead of the built-in one (JSON)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Clone)]
struct RenderArgs {
    /// Seed for the noise voices
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,
}

impl RenderArgs {
    fn settings(&self) -> RenderSettings {
        RenderSettings { sample_rate: self.sample_rate, seed: self.seed, ..RenderSettings::default() }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List the genres in the catalog
    Genres,

    /// Render a backing track to a WAV file
    Render {
        #[arg(long, short = 'g', default_value = "pop")]
        genre: String,
        /// intro, verse, bridge, chorus or outro
        #[arg(long, short = 'p', default_value = "verse")]
        part: String,
        /// Tempo; defaults to the genre's own
        #[arg(long)]
        bpm: Option<f64>,
        #[arg(long, short = 'b', default_value_t = 4)]
        bars: u32,
        #[arg(long, short = 'o', default_value = ".")]
        out_dir: PathBuf,
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print every hit of one bar without rendering audio
    Schedule {
        #[arg(long, short = 'g', default_value = "pop")]
        genre: String,
        #[arg(long, short = 'p', default_value = "verse")]
        part: String,
        #[arg(long)]
        bpm: Option<f64>,
    },

    /// Loop a pattern on the default output device
    Preview {
        #[arg(long, short = 'g', default_value = "pop")]
        genre: String,
        #[arg(long, short = 'p', default_value = "verse")]
        part: String,
        #[arg(long)]
        bpm: Option<f64>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },

    /// Join recorded takes end to end into one WAV
    Assemble {
        /// Takes, in playing order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        #[arg(long, short = 'o')]
        out: PathBuf,
    },

    /// Render a backing track for every part of a song manifest and join its takes
    Song {
        manifest: PathBuf,
        #[arg(long, short = 'b', default_value_t = DEFAULT_BARS)]
        bars: u32,
        #[arg(long, short = 'o', default_value = "out")]
        out_dir: PathBuf,
        #[command(flatten)]
        render: RenderArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // the preview owns the terminal, so keep it quiet unless asked
    let default_level = if matches!(cli.command, Command::Preview { .. }) { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();

    let catalog = match &cli.catalog {
        Some(path) => persistence::load_catalog(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    match cli.command {
        Command::Genres => list_genres(&catalog),
        Command::Render { genre, part, bpm, bars, out_dir, render } => {
            warn_unknown_genre(&catalog, &genre);
            let part = PartType::parse_or_default(&part);
            let bpm = bpm.unwrap_or_else(|| catalog.default_bpm(&genre) as f64);
            let request = BackingTrackRequest::new(genre, part, bpm, bars);
            let plan = RenderPlan::resolve(&catalog, &request, render.settings())?;
            let name = format!("{}-{}-{}bpm", plan.genre(), part, bpm.round());
            let track = RenderedTrack::new(plan.submit()?.wait()?)?;
            let file = track.export(&out_dir, &name)?;
            println!("{} ({})", file.path().display(), format_duration(track.duration()));
            Ok(())
        }
        Command::Schedule { genre, part, bpm } => {
            warn_unknown_genre(&catalog, &genre);
            let part = PartType::parse_or_default(&part);
            let bpm = bpm.unwrap_or_else(|| catalog.default_bpm(&genre) as f64);
            print_schedule(&catalog, BackingTrackRequest::new(genre, part, bpm, 1))
        }
        Command::Preview { genre, part, bpm, seed } => {
            warn_unknown_genre(&catalog, &genre);
            let player = BeatPlayer::new(CpalBackend { seed }, SystemClock::new(), catalog);
            let middle = Middle::new(player, &genre, PartType::parse_or_default(&part), bpm);
            run_preview(middle)
        }
        Command::Assemble { inputs, out } => {
            let mut buffers = Vec::with_capacity(inputs.len());
            for path in &inputs {
                buffers.push(loader::decode_file(path).with_context(|| format!("decoding {}", path.display()))?);
            }
            let track = RenderedTrack::new(concatenate(&buffers)?)?;
            write_file(&out, &track.wav)?;
            println!("{} ({})", out.display(), format_duration(track.duration()));
            Ok(())
        }
        Command::Song { manifest, bars, out_dir, render } => {
            let mut song = persistence::load_song(&manifest, &catalog)
                .with_context(|| format!("loading song {}", manifest.display()))?;
            let failures = song.generate_backing_tracks(&catalog, bars, render.settings());
            for f in &failures {
                eprintln!("skipped {}: {}", f.label, f.error);
            }
            for part in song.parts() {
                if let Some(track) = &part.backing {
                    let file = track.export(&out_dir, &format!("{:02}-{}", part.order + 1, part.label))?;
                    println!("{} ({})", file.path().display(), format_duration(track.duration()));
                }
            }
            if song.parts().iter().any(|p| p.recording.is_some()) {
                let vocals = song.assemble_vocals()?;
                let file = vocals.export(&out_dir, "vocals")?;
                println!("{} ({})", file.path().display(), format_duration(vocals.duration()));
            }
            if !failures.is_empty() && failures.len() == song.parts().len() {
                bail!("no backing track could be rendered");
            }
            Ok(())
        }
    }
}

// unknown names still play, as the default genre
fn warn_unknown_genre(catalog: &Catalog, genre: &str) {
    if !catalog.contains(genre) {
        log::warn!("no genre called {genre:?}, using {}", catalog.default_genre().key);
    }
}

fn list_genres(catalog: &Catalog) -> anyhow::Result<()> {
    let default = &catalog.default_genre().key;
    for g in catalog.genres() {
        let mark = if &g.key == default { "*" } else { " " };
        println!("{mark} {:<12} {:<12} {:>3} bpm  swing {:.2}", g.key, g.name, g.default_bpm, g.swing);
    }
    Ok(())
}

fn print_schedule(catalog: &Catalog, request: BackingTrackRequest) -> anyhow::Result<()> {
    let plan = RenderPlan::resolve(catalog, &request, RenderSettings::default())?;
    let mut sink = RecordingSink::new(DEFAULT_SAMPLE_RATE, 0);
    let hits = plan.schedule(&mut sink);
    let timing = plan.timing();
    println!(
        "{} {} at {} bpm, swing {:.2}: {} hits, {} patches in one bar ({:.3}s)",
        plan.genre(),
        request.part,
        timing.bpm,
        timing.swing,
        hits,
        sink.patches.len(),
        timing.bar_duration()
    );
    sink.patches.sort_by(|a, b| a.start.total_cmp(&b.start));
    for patch in &sink.patches {
        println!("{:>8.4}s  {:>6.3}s  {}", patch.start, patch.duration(), describe(patch));
    }
    Ok(())
}

fn describe(patch: &Patch) -> String {
    let source = match &patch.source {
        Source::Oscillator { waveform, frequency } => {
            format!("{:?} {:.1}Hz", waveform, frequency.value_at(patch.start)).to_lowercase()
        }
        Source::Noise { .. } => "noise".to_string(),
    };
    let filter = match &patch.filter {
        Some(f) => {
            let kind = match f.kind {
                FilterKind::LowPass => "lowpass",
                FilterKind::HighPass => "highpass",
                FilterKind::BandPass => "bandpass",
            };
            format!(" -> {kind} {:.0}Hz", f.frequency)
        }
        None => String::new(),
    };
    format!("{source}{filter}  peak {:.2}", patch.gain.value_at(patch.start))
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

fn run_preview(mut middle: Middle<CpalBackend, SystemClock>) -> anyhow::Result<()> {
    terminal::enable_raw_mode()?;
    let _guard = RawModeGuard; // auto drops when out of scope

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut term = Terminal::new(backend)?;
    term.clear()?;

    let tick_rate = Duration::from_millis(16); // ~60fps
    loop {
        middle.tick();
        let ds = middle.display_state().clone();
        term.draw(|frame| {
            tui::view::render(frame, frame.area(), &ds);
        })?;

        for event in tui::input::poll_input(tick_rate)? {
            if !middle.handle_input(event)? {
                drop(term);
                return Ok(());
            }
        }
    }
}

struct RawModeGuard;
impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
