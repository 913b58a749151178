use track_collide::{
    InitialConditions, OutcomePreview, SimulationConfig, SimulationLoop,
    bodies::{Body, BodyColor, BodyId},
    core::{Frame, ManualScheduler, Renderer, NOTICE_DURATION},
    error::SimError,
};
use clap::Parser;
use crossterm::{
    ExecutableCommand, QueueableCommand,
    terminal::{Clear, ClearType, size},
    cursor::{Hide, Show, MoveTo},
    style::{Color, Print, SetForegroundColor, ResetColor},
};
use std::io::{stdout, Stdout, Write};
use std::thread::sleep;
use std::time::{Duration, Instant};

const FRAME_DURATION: Duration = Duration::from_millis(16); // ~60 FPS
const TRACK_ROW: u16 = 10;
const READOUT_ROW: u16 = 13;

/// Two bodies colliding on a bounded track, drawn in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial velocity of the first body
    #[arg(allow_hyphen_values = true)]
    v1: String,

    /// Initial velocity of the second body
    #[arg(allow_hyphen_values = true)]
    v2: String,

    /// Mass of the first body
    #[arg(allow_hyphen_values = true)]
    m1: String,

    /// Mass of the second body
    #[arg(allow_hyphen_values = true)]
    m2: String,

    /// Track width in track units
    #[arg(long)]
    width: Option<f32>,

    /// Fraction of the speed kept after a wall bounce
    #[arg(long)]
    damping: Option<f32>,

    /// How long to run the animation, in seconds
    #[arg(long, default_value_t = 15.0)]
    seconds: f32,
}

struct TerminalRenderer {
    stdout: Stdout,
    columns: u16,
}

impl TerminalRenderer {
    fn new(mut stdout: Stdout) -> std::io::Result<Self> {
        let (columns, _) = size()?;
        stdout.execute(Hide)?;
        stdout.execute(Clear(ClearType::All))?;

        Ok(Self { stdout, columns })
    }

    fn column(&self, position: f32, track_width: f32) -> i32 {
        (position / track_width * f32::from(self.columns.saturating_sub(1))).round() as i32
    }

    fn draw_body(&mut self, body: &Body, track_width: f32) -> std::io::Result<()> {
        let left = self.column(body.left_edge(), track_width).max(0);
        let right = self.column(body.right_edge(), track_width).min(i32::from(self.columns) - 1);
        let BodyColor { r, g, b } = body.get_color();

        self.stdout.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
        for x in left..=right {
            self.stdout.queue(MoveTo(x as u16, TRACK_ROW - 1))?.queue(Print('█'))?;
        }

        // Direction indicator on the leading side
        let (arrow_x, arrow) = if body.moves_right() {
            (right + 2, '→')
        } else {
            (left - 2, '←')
        };
        if (0..i32::from(self.columns)).contains(&arrow_x) {
            self.stdout
                .queue(SetForegroundColor(Color::White))?
                .queue(MoveTo(arrow_x as u16, TRACK_ROW - 1))?
                .queue(Print(arrow))?;
        }

        self.stdout.queue(ResetColor)?;
        Ok(())
    }

    fn finish(mut self) -> std::io::Result<()> {
        self.stdout.execute(Show)?;
        self.stdout.execute(MoveTo(0, READOUT_ROW + 2))?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    type Error = std::io::Error;

    fn render(&mut self, frame: &Frame<'_>) -> std::io::Result<()> {
        let track_width = frame.track().width();

        self.stdout.queue(MoveTo(0, TRACK_ROW - 1))?.queue(Clear(ClearType::CurrentLine))?;
        for body in frame.bodies() {
            self.draw_body(body, track_width)?;
        }

        self.stdout.queue(MoveTo(0, TRACK_ROW))?;
        for _ in 0..self.columns {
            self.stdout.queue(Print('▬'))?;
        }

        self.stdout
            .queue(MoveTo(0, READOUT_ROW))?
            .queue(Clear(ClearType::CurrentLine))?
            .queue(Print(format!(
                "v1 = {:.2} m/s   v2 = {:.2} m/s   collisions: {}",
                frame.live_velocity(BodyId::First),
                frame.live_velocity(BodyId::Second),
                frame.collision_count(),
            )))?;

        self.stdout.flush()
    }
}

fn print_preview(preview: &OutcomePreview) {
    println!("                 initial     final");
    println!("v1 (m/s)      {:>10.2} {:>9.2}", preview.initial_velocities[0], preview.final_velocities[0]);
    println!("v2 (m/s)      {:>10.2} {:>9.2}", preview.initial_velocities[1], preview.final_velocities[1]);
    println!("momentum      {:>10.2} {:>9.2}", preview.initial_momentum, preview.final_momentum);
    println!("energy        {:>10.2} {:>9.2}", preview.initial_energy, preview.final_energy);
}

fn show_notice(message: &str) -> std::io::Result<()> {
    let mut stdout = stdout();
    stdout
        .queue(SetForegroundColor(Color::Red))?
        .queue(Print(message))?
        .queue(Print('\n'))?
        .queue(ResetColor)?;
    stdout.flush()?;

    sleep(NOTICE_DURATION);
    Ok(())
}

fn animate(
    sim: &mut SimulationLoop<ManualScheduler>,
    renderer: &mut TerminalRenderer,
    seconds: f32,
) -> std::io::Result<()> {
    let started = Instant::now();

    while started.elapsed().as_secs_f32() < seconds {
        let frame_time = Instant::now();
        if !sim.pump(renderer)? {
            break;
        }

        let elapsed = frame_time.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let conditions = match InitialConditions::from_fields(&args.v1, &args.v2, &args.m1, &args.m2) {
        Ok(conditions) => conditions,
        Err(SimError::InvalidInput(err)) => {
            tracing::warn!("rejected input: {err}");
            show_notice(err.user_message())?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let mut config = SimulationConfig::default();
    if let Some(width) = args.width {
        config = config.with_track_width(width);
    }
    if let Some(damping) = args.damping {
        config = config.with_wall_damping(damping);
    }

    let mut sim = SimulationLoop::new(ManualScheduler::new(), config)?;
    let preview = match sim.start(conditions) {
        Ok(preview) => *preview,
        Err(SimError::InvalidInput(err)) => {
            tracing::warn!("rejected input: {err}");
            show_notice(err.user_message())?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    tracing::info!(track_width = sim.get_config().track_width, "track ready");
    print_preview(&preview);
    sleep(Duration::from_secs(2));

    let mut renderer = TerminalRenderer::new(stdout())?;
    let outcome = animate(&mut sim, &mut renderer, args.seconds);

    // The cursor comes back even when drawing failed
    sim.stop();
    renderer.finish()?;
    outcome?;

    if let Some(world) = sim.world() {
        tracing::info!(
            collisions = world.collision_count(),
            seconds = world.get_time(),
            "animation finished"
        );
    }

    Ok(())
}
