//! Lesson 4: mouse-reactive buttons and a keyboard arrow

use std::process::ExitCode;

use sdl_lessons::media::TextMaker;
use sdl_lessons::renderer::{Context, Texture, init_ttf, is_quit};
use sdl_lessons::ui::{Arrow, quadrant_buttons};
use sdl_lessons::{Result, Settings, palette};

fn run() -> Result<()> {
    let settings = Settings::load()?;
    let mut ctx = Context::new(&settings)?;
    let creator = ctx.texture_creator();
    let ttf = init_ttf()?;

    let labels = TextMaker::load(&ttf, &settings)?.button_labels(&creator)?;
    let up = Texture::load(&creator, &settings.media("up.png"))?;
    let default_arrow = Texture::load(&creator, &settings.media("default.png"))?;

    let (w, h) = (ctx.width(), ctx.height());
    let mut buttons = quadrant_buttons(w, h);
    let mut arrow = Arrow::centered(w as i32 / 2, h as i32 / 2);

    'running: loop {
        for event in ctx.poll_events() {
            if is_quit(&event) {
                break 'running;
            }
            for button in &mut buttons {
                button.handle_event(&event);
            }
        }
        arrow.set_state(ctx.arrow_state());

        let canvas = ctx.canvas();
        canvas.set_draw_color(palette::WHITE);
        canvas.clear();
        for button in &buttons {
            button.render(canvas, &labels)?;
        }
        arrow.render(canvas, &up, &default_arrow)?;
        canvas.present();
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
