//! SDL Lessons entry point
//!
//! The final lesson: quadrant buttons, keyboard arrow, sound effects on the
//! number keys, an FPS line and the bouncing ball scene.

use std::process::ExitCode;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use sdl2::event::Event;
use sdl2::render::WindowCanvas;

use sdl_lessons::audio::{AudioCommand, AudioSystem};
use sdl_lessons::media::Media;
use sdl_lessons::renderer::{Context, draw_scene, init_ttf, is_quit};
use sdl_lessons::sim::{FpsCounter, Scene};
use sdl_lessons::ui::{Arrow, ArrowState, Button, quadrant_buttons};
use sdl_lessons::{Result, Settings, palette};

/// Lesson state that lives between frames
struct Game {
    scene: Scene,
    buttons: [Button; 4],
    arrow: Arrow,
    fps: FpsCounter,
    last_time: Instant,
    width: u32,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        let (w, h) = (settings.width, settings.height);
        Self {
            scene: Scene::seeded(settings.bounds(), settings.ball_count, seed),
            buttons: quadrant_buttons(w, h),
            arrow: Arrow::centered(w as i32 / 2, h as i32 / 2),
            fps: FpsCounter::new(),
            last_time: Instant::now(),
            width: w,
        }
    }

    /// Route one event; returns false when the lesson should end
    fn handle_event(&mut self, event: &Event, media: &Media<'_, '_>) -> bool {
        if is_quit(event) {
            return false;
        }

        if let Event::KeyDown {
            keycode: Some(key), ..
        } = *event
        {
            if let Some(command) = AudioCommand::from_keycode(key) {
                log::debug!("{:?} -> {:?}", key, command);
                media.sounds.apply(command);
            }
        }

        for button in &mut self.buttons {
            button.handle_event(event);
        }
        true
    }

    /// Advance the scene by the wall time since the last frame
    fn update(&mut self, arrow: ArrowState) {
        self.arrow.set_state(arrow);

        let now = Instant::now();
        self.scene.update(now - self.last_time);
        self.last_time = now;
    }

    fn render(&self, canvas: &mut WindowCanvas, media: &Media<'_, '_>) -> Result<()> {
        canvas.set_draw_color(palette::WHITE);
        canvas.clear();

        for button in &self.buttons {
            button.render(canvas, &media.labels)?;
        }

        let info = media.info();
        info.render_at(canvas, self.width as i32 / 2 - info.width() as i32 / 2, 50)?;

        self.arrow.render(canvas, &media.arrow, &media.default_arrow)?;
        draw_scene(canvas, &self.scene)?;

        canvas.present();
        Ok(())
    }

    /// Count the presented frame and refresh the FPS line when it changes
    fn count_frame(&mut self, media: &mut Media<'_, '_>) {
        let before = self.fps.fps10();
        self.fps.tick();
        if self.fps.fps10() != before {
            media.refresh_info(&self.fps.label());
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn run() -> Result<()> {
    let started = Instant::now();

    let settings = Settings::load()?;
    let mut ctx = Context::new(&settings)?;
    let creator = ctx.texture_creator();
    let ttf = init_ttf()?;
    let _audio = AudioSystem::init(ctx.sdl())?;
    let mut media = Media::load(&settings, &creator, &ttf)?;

    media.set_info(&format!(
        "Milliseconds for initalizing and load media : {}",
        started.elapsed().as_millis()
    ))?;

    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut game = Game::new(&settings, seed);
    log::info!(
        "Scene of {} balls initialized with seed: {}",
        game.scene.balls.len(),
        seed
    );

    'running: loop {
        for event in ctx.poll_events() {
            if !game.handle_event(&event, &media) {
                break 'running;
            }
        }

        game.update(ctx.arrow_state());
        game.render(ctx.canvas(), &media)?;
        game.count_frame(&mut media);
    }

    log::info!("Quit after {:.1}s", started.elapsed().as_secs_f32());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("SDL Lessons starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
