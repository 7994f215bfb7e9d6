//! Lesson 3: textures, modulation, viewports, geometry, sprites and text
//!
//! W/E/R/T raise the red/green/blue/alpha modulation and S/D/F/G lower it.
//! Arrow keys turn the arrow; any other key resets it.

use std::process::ExitCode;

use sdl2::event::Event;
use sdl2::rect::Rect;
use sdl2::render::BlendMode;

use sdl_lessons::media::TextMaker;
use sdl_lessons::renderer::sprite::slots;
use sdl_lessons::renderer::texture::centered_origin;
use sdl_lessons::renderer::{
    Context, SpriteSheet, Texture, ViewportLayout, draw_geometry, init_ttf, is_quit,
};
use sdl_lessons::ui::{Arrow, ArrowState, ColorTint};
use sdl_lessons::{Error, Result, Settings, palette};

const PANGRAM: &str = "The quick brown fox jumps over the lazy dogs";

/// Edge of the walking sprite's on-screen square
const WALKER_SIZE: u32 = 128;

fn run() -> Result<()> {
    let settings = Settings::load()?;
    let mut ctx = Context::new(&settings)?;
    let creator = ctx.texture_creator();
    let ttf = init_ttf()?;

    let load = |name: &str| Texture::load(&creator, &settings.media(name));
    let peace = load("peace.png")?;
    let up = load("up.png")?;
    let default_arrow = load("default.png")?;
    let mut landscape = load("tree.png")?;
    let mut circles = load("circles4.png")?;
    circles.set_blend_mode(BlendMode::Blend);
    let walker = load("walkingSprites.png")?;
    let text = TextMaker::load(&ttf, &settings)?.render(&creator, PANGRAM)?;

    let (w, h) = (ctx.width(), ctx.height());
    let layout = ViewportLayout::for_size(w, h);
    let circle_sheet = SpriteSheet::circles();
    let circle_slots = slots(circle_sheet.len() as u32, 160, 820, 320, 128);
    let walking = SpriteSheet::walking();
    let (walker_x, walker_y) = centered_origin(w, h, WALKER_SIZE, WALKER_SIZE);
    let walker_rect = Rect::new(walker_x, walker_y, WALKER_SIZE, WALKER_SIZE);

    let mut arrow = Arrow::new(Rect::new(832, 192, 256, 256));
    let mut tint = ColorTint::default();
    let mut frame: u32 = 0;

    log::info!("Viewports lesson running");
    'running: loop {
        for event in ctx.poll_events() {
            if is_quit(&event) {
                break 'running;
            }
            if let Event::KeyDown {
                keycode: Some(key), ..
            } = event
            {
                if tint.apply_key(key) {
                    log::debug!("Tint now {:?}", tint);
                } else {
                    arrow.set_state(ArrowState::from_keycode(key));
                }
            }
        }

        landscape.set_color_mod(tint.r, tint.g, tint.b);
        circles.set_alpha_mod(tint.a);

        let canvas = ctx.canvas();
        canvas.set_draw_color(palette::WHITE);
        canvas.clear();

        canvas.set_viewport(layout.whole);
        canvas
            .copy(landscape.raw(), None, None)
            .map_err(Error::Draw)?;

        canvas.set_viewport(layout.top_left);
        canvas.copy(peace.raw(), None, None).map_err(Error::Draw)?;

        canvas.set_viewport(layout.bottom);
        draw_geometry(canvas, layout.bottom.width(), layout.bottom.height())?;

        canvas.set_viewport(layout.whole);
        arrow.render(canvas, &up, &default_arrow)?;

        for (clip, slot) in circle_sheet.clips().iter().zip(&circle_slots) {
            canvas
                .copy(circles.raw(), *clip, *slot)
                .map_err(Error::Draw)?;
        }

        if let Some(clip) = walking.frame(frame) {
            canvas
                .copy(walker.raw(), clip, walker_rect)
                .map_err(Error::Draw)?;
        }

        text.render_centered(canvas, w, h)?;

        canvas.present();
        frame = frame.wrapping_add(1);
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
