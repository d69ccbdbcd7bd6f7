use sdl2::image::{InitFlag, LoadTexture, Sdl2ImageContext};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator, TextureQuery};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use crate::constants::{GOAL_LINE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::game::Game;
use crate::round::LightState;
use crate::vehicle::Vehicle;

pub struct Renderer<'a> {
    player_texture: Option<Texture<'a>>,
    ai_texture: Option<Texture<'a>>,
    doll_texture: Option<Texture<'a>>,
    banner_font: Option<Font<'a, 'static>>,
    status_font: Option<Font<'a, 'static>>,
    _image_context: Sdl2ImageContext,
}

impl<'a> Renderer<'a> {
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        ttf_context: &'a Sdl2TtfContext,
    ) -> Result<Self, String> {
        let image_context = sdl2::image::init(InitFlag::PNG)?;

        Ok(Renderer {
            player_texture: load_texture_or_warn(texture_creator, "assets/vehicles/bluecar.png"),
            ai_texture: load_texture_or_warn(texture_creator, "assets/vehicles/redcar.png"),
            doll_texture: load_texture_or_warn(texture_creator, "assets/props/doll.png"),
            banner_font: load_font_or_warn(ttf_context, "assets/fonts/font.ttf", 48),
            status_font: load_font_or_warn(ttf_context, "assets/fonts/font.ttf", 36),
            _image_context: image_context,
        })
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
        self.draw_road(canvas)?;
        self.draw_doll(canvas)?;
        self.draw_light(canvas, game.round.light)?;
        self.draw_finish_line(canvas)?;

        for vehicle in &game.vehicles {
            self.draw_vehicle(canvas, vehicle)?;
        }

        self.draw_overlays(canvas, game)?;

        canvas.present();
        Ok(())
    }

    // Procedural road background: dark field, asphalt band, dashed
    // center line.
    fn draw_road(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(30, 30, 30));
        canvas.clear();

        canvas.set_draw_color(Color::RGB(50, 50, 50));
        canvas.fill_rect(Rect::new(
            0,
            (WINDOW_HEIGHT / 3) as i32,
            WINDOW_WIDTH,
            WINDOW_HEIGHT / 3,
        ))?;

        canvas.set_draw_color(Color::RGB(200, 200, 0));
        let center_x = (WINDOW_WIDTH / 2) as i32;
        let mut y = 0;
        while y < WINDOW_HEIGHT as i32 {
            canvas.fill_rect(Rect::new(center_x - 5, y, 10, 20))?;
            y += 40;
        }

        Ok(())
    }

    fn draw_doll(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        if let Some(texture) = &self.doll_texture {
            canvas.copy(texture, None, Some(Rect::new(120, 20, 120, 180)))?;
        }
        Ok(())
    }

    fn draw_light(&self, canvas: &mut Canvas<Window>, light: LightState) -> Result<(), String> {
        let (color, text_color, status) = match light {
            LightState::Green => (Color::RGB(0, 255, 0), Color::RGB(200, 255, 200), "GO!"),
            LightState::Red => (Color::RGB(255, 0, 0), Color::RGB(255, 200, 200), "STOP!"),
        };

        canvas.set_draw_color(color);
        fill_circle(canvas, 50, 40, 20)?;

        // Brighter core so the light reads as lit.
        canvas.set_draw_color(Color::RGB(
            color.r.saturating_add(100),
            color.g.saturating_add(100),
            color.b.saturating_add(100),
        ));
        fill_circle(canvas, 50, 40, 10)?;

        if let Some(font) = &self.status_font {
            self.draw_text(canvas, font, status, 30, 65, text_color)?;
        }

        Ok(())
    }

    fn draw_finish_line(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let mut x = 0;
        let mut index = 0;
        while x < WINDOW_WIDTH as i32 {
            let color = if index % 2 == 0 {
                Color::RGB(255, 255, 0)
            } else {
                Color::RGB(0, 0, 0)
            };
            canvas.set_draw_color(color);
            canvas.fill_rect(Rect::new(x, GOAL_LINE as i32, 20, 5))?;
            x += 20;
            index += 1;
        }
        Ok(())
    }

    fn draw_vehicle(&self, canvas: &mut Canvas<Window>, vehicle: &Vehicle) -> Result<(), String> {
        if !vehicle.alive && !vehicle.won {
            return Ok(());
        }

        let rect = vehicle.rect();
        let texture = if vehicle.is_human {
            &self.player_texture
        } else {
            &self.ai_texture
        };

        match texture {
            Some(texture) => canvas.copy(texture, None, Some(rect))?,
            None => {
                // Solid-color fallback when the sprite failed to load.
                let color = if vehicle.is_human {
                    Color::RGB(0, 100, 255)
                } else {
                    Color::RGB(255, 50, 50)
                };
                canvas.set_draw_color(color);
                canvas.fill_rect(rect)?;
            }
        }

        Ok(())
    }

    fn draw_overlays(&self, canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
        let center_y = (WINDOW_HEIGHT / 2) as i32;

        if game.round.lost {
            self.draw_banner(
                canvas,
                "CRASHED! (Press R)",
                Color::RGB(255, 50, 50),
                (WINDOW_WIDTH / 2) as i32 - 120,
                center_y,
            )?;
        } else if game.round.won {
            self.draw_banner(
                canvas,
                "FINISH LINE! (Press R)",
                Color::RGB(50, 255, 50),
                (WINDOW_WIDTH / 2) as i32 - 140,
                center_y,
            )?;
        }

        if game.paused {
            self.draw_banner(
                canvas,
                "PAUSED",
                Color::RGB(220, 220, 220),
                (WINDOW_WIDTH / 2) as i32 - 60,
                center_y - 60,
            )?;
        }

        Ok(())
    }

    fn draw_banner(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        color: Color,
        x: i32,
        y: i32,
    ) -> Result<(), String> {
        match &self.banner_font {
            Some(font) => self.draw_text(canvas, font, text, x, y, color),
            None => {
                // No font available; show a plain colored bar instead.
                canvas.set_draw_color(color);
                canvas.fill_rect(Rect::new(x, y, 280, 40))?;
                Ok(())
            }
        }
    }

    fn draw_text(
        &self,
        canvas: &mut Canvas<Window>,
        font: &Font,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(), String> {
        let surface = font
            .render(text)
            .blended(color)
            .map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let texture = texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;

        let TextureQuery { width, height, .. } = texture.query();
        canvas.copy(&texture, None, Some(Rect::new(x, y, width, height)))?;

        Ok(())
    }
}

fn load_texture_or_warn<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Option<Texture<'a>> {
    match texture_creator.load_texture(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::warn!("Could not load {}: {}", path, e);
            None
        }
    }
}

fn load_font_or_warn<'a>(
    ttf_context: &'a Sdl2TtfContext,
    path: &str,
    point_size: u16,
) -> Option<Font<'a, 'static>> {
    match ttf_context.load_font(path, point_size) {
        Ok(font) => Some(font),
        Err(e) => {
            log::warn!("Could not load {} at {}pt: {}", path, point_size, e);
            None
        }
    }
}

fn fill_circle(canvas: &mut Canvas<Window>, cx: i32, cy: i32, radius: i32) -> Result<(), String> {
    for dy in -radius..=radius {
        let dx = (((radius * radius - dy * dy) as f32).sqrt()) as i32;
        canvas.draw_line((cx - dx, cy + dy), (cx + dx, cy + dy))?;
    }
    Ok(())
}
