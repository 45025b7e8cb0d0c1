//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of the
//! session. No game logic is performed; this module only translates the
//! snapshot into terminal commands. Every board cell is two terminal columns
//! wide so the board looks square.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};
use glam::Vec2;
use snake_game::entities::{GamePhase, Position, PowerUpKind, Rgb};
use snake_game::view::Snapshot;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Rgb { r: 0x00, g: 0xff, b: 0x88 };
const C_BORDER: Color = Color::Rgb { r: 0x16, g: 0x53, b: 0x7e };
const C_BOARD: Color = Color::Rgb { r: 0x0f, g: 0x34, b: 0x60 };
const C_HUD_SCORE: Color = Color::Rgb { r: 0xff, g: 0xff, b: 0x00 };
const C_HUD_HIGH: Color = Color::Rgb { r: 0xff, g: 0x6b, b: 0x35 };
const C_STATUS: Color = Color::Rgb { r: 0x00, g: 0xcc, b: 0xff };
const C_HINT: Color = Color::DarkGrey;

const SNAKE_NORMAL: Rgb = Rgb::hex(0x00ff88);
const SNAKE_INVINCIBLE: Rgb = Rgb::hex(0xff0080);

/// Rows used around the board: HUD, two borders, status and hint.
const CHROME_ROWS: u16 = 5;

fn color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Top-left corner of the HUD row and the board size in terminal cells.
struct Layout {
    left: u16,
    top: u16,
    board_w: u16,
    board_h: u16,
}

impl Layout {
    fn new(frame: &Snapshot, term: (u16, u16)) -> Option<Self> {
        let board_w = frame.cols as u16 * 2;
        let board_h = frame.rows as u16;
        let (width, height) = term;
        if width < board_w + 2 || height < board_h + CHROME_ROWS {
            return None;
        }
        Some(Self {
            left: (width - board_w - 2) / 2,
            top: (height - board_h - CHROME_ROWS) / 2,
            board_w,
            board_h,
        })
    }

    fn board_x(&self) -> u16 {
        self.left + 1
    }

    fn board_y(&self) -> u16 {
        self.top + 2
    }

    fn cell(&self, cell: Position) -> (u16, u16) {
        (
            self.board_x() + cell.col as u16 * 2,
            self.board_y() + cell.row as u16,
        )
    }

    /// Terminal cell under a screen-space point, if it is inside the board.
    fn point(&self, p: Vec2, cell_size: f32) -> Option<(u16, u16)> {
        let x = (p.x / cell_size * 2.0).floor();
        let y = (p.y / cell_size).floor();
        if x < 0.0 || y < 0.0 || x >= self.board_w as f32 || y >= self.board_h as f32 {
            return None;
        }
        Some((self.board_x() + x as u16, self.board_y() + y as u16))
    }

    fn center_x(&self) -> u16 {
        self.board_x() + self.board_w / 2
    }

    fn bottom(&self) -> u16 {
        self.board_y() + self.board_h
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for a terminal of size `term`.
pub fn render<W: Write>(out: &mut W, frame: &Snapshot, term: (u16, u16)) -> std::io::Result<()> {
    out.queue(terminal::BeginSynchronizedUpdate)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match Layout::new(frame, term) {
        Some(layout) => {
            draw_hud(out, &layout, frame)?;
            draw_board(out, &layout)?;
            draw_food(out, &layout, frame)?;
            draw_power_up(out, &layout, frame)?;
            draw_snake(out, &layout, frame)?;
            draw_particles(out, &layout, frame)?;
            draw_texts(out, &layout, frame)?;
            draw_status(out, &layout, frame)?;

            match frame.phase {
                GamePhase::Over => draw_game_over(out, &layout, frame)?,
                GamePhase::Paused => draw_paused(out, &layout)?,
                GamePhase::Running => {}
            }
        }
        None => draw_too_small(out, frame, term)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term.1.saturating_sub(1)))?;
    out.queue(terminal::EndSynchronizedUpdate)?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, layout: &Layout, frame: &Snapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(layout.left, layout.top))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(style::SetAttribute(Attribute::Bold))?;
    out.queue(Print(format!("Score: {}", frame.score)))?;

    let title = "AWESOME SNAKE";
    out.queue(cursor::MoveTo(
        layout.center_x().saturating_sub(title.len() as u16 / 2),
        layout.top,
    ))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;

    let high = format!("High Score: {}", frame.high_score);
    let right = layout.left + layout.board_w + 2;
    out.queue(cursor::MoveTo(
        right.saturating_sub(high.chars().count() as u16),
        layout.top,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    out.queue(Print(&high))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;
    Ok(())
}

// ── Board ─────────────────────────────────────────────────────────────────────

fn draw_board<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let w = layout.board_w as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(layout.left, layout.top + 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;
    out.queue(cursor::MoveTo(layout.left, layout.bottom()))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    let blank = " ".repeat(w);
    for row in layout.board_y()..layout.bottom() {
        out.queue(cursor::MoveTo(layout.left, row))?;
        out.queue(style::SetForegroundColor(C_BORDER))?;
        out.queue(Print("│"))?;
        out.queue(style::SetBackgroundColor(C_BOARD))?;
        out.queue(Print(&blank))?;
        out.queue(style::ResetColor)?;
        out.queue(style::SetForegroundColor(C_BORDER))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_food<W: Write>(out: &mut W, layout: &Layout, frame: &Snapshot) -> std::io::Result<()> {
    let pulse = frame.phases.food_pulse;
    let tint = Rgb((255.0 * pulse) as u8, 0x44, 0x44);
    let (x, y) = layout.cell(frame.food);
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetBackgroundColor(C_BOARD))?;
    out.queue(style::SetForegroundColor(color(tint)))?;
    out.queue(Print(if pulse > 0.75 { "██" } else { "▓▓" }))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

/// Symbols:
///   ◊◊  (magenta) Invincible
///   »»  (yellow)  SpeedBoost
///   $$  (cyan)    DoublePoints
fn draw_power_up<W: Write>(out: &mut W, layout: &Layout, frame: &Snapshot) -> std::io::Result<()> {
    let Some((position, kind)) = frame.power_up else {
        return Ok(());
    };
    let (base, symbol) = match kind {
        PowerUpKind::Invincible => (Rgb::hex(0xff00ff), "◊◊"),
        PowerUpKind::SpeedBoost => (Rgb::hex(0xffff00), "»»"),
        PowerUpKind::DoublePoints => (Rgb::hex(0x00ffff), "$$"),
    };
    let (x, y) = layout.cell(position);
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetBackgroundColor(color(base.scaled(frame.phases.power_up_pulse))))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(style::SetAttribute(Attribute::Bold))?;
    out.queue(Print(symbol))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

fn draw_snake<W: Write>(out: &mut W, layout: &Layout, frame: &Snapshot) -> std::io::Result<()> {
    let phases = &frame.phases;
    let base = if frame.invincible {
        SNAKE_INVINCIBLE
    } else {
        SNAKE_NORMAL
    };

    // Tail first so the head is drawn on top when cells overlap.
    for (i, &cell) in frame.snake.iter().enumerate().rev() {
        let (x, y) = layout.cell(cell);
        out.queue(cursor::MoveTo(x, y))?;
        if i == 0 {
            let glow = if frame.invincible {
                phases.invincible_flicker()
            } else {
                phases.snake_shimmer
            };
            out.queue(style::SetBackgroundColor(color(base.scaled(glow))))?;
            out.queue(style::SetForegroundColor(Color::White))?;
            out.queue(Print(if phases.blink { "--" } else { "••" }))?;
        } else {
            let intensity = (1.0 - i as f32 * 0.1).max(0.3);
            let tint = base.scaled(intensity * phases.body_shimmer(i));
            out.queue(style::SetBackgroundColor(color(tint)))?;
            out.queue(Print("  "))?;
        }
        out.queue(style::ResetColor)?;
    }
    Ok(())
}

// ── Effects ───────────────────────────────────────────────────────────────────

fn draw_particles<W: Write>(out: &mut W, layout: &Layout, frame: &Snapshot) -> std::io::Result<()> {
    for particle in frame.particles {
        let Some((x, y)) = layout.point(particle.pos, frame.cell_size) else {
            continue;
        };
        let glyph = if particle.size > 3.0 {
            "●"
        } else if particle.size > 2.0 {
            "•"
        } else {
            "·"
        };
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetBackgroundColor(C_BOARD))?;
        out.queue(style::SetForegroundColor(color(particle.color)))?;
        out.queue(Print(glyph))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

fn draw_texts<W: Write>(out: &mut W, layout: &Layout, frame: &Snapshot) -> std::io::Result<()> {
    for text in frame.texts {
        let Some((x, y)) = layout.point(text.pos, frame.cell_size) else {
            continue;
        };
        let half = text.text.chars().count() as u16 / 2;
        let min_x = layout.board_x();
        let max_x = (layout.board_x() + layout.board_w)
            .saturating_sub(text.text.chars().count() as u16);
        let x = x.saturating_sub(half).clamp(min_x, max_x.max(min_x));
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetBackgroundColor(C_BOARD))?;
        out.queue(style::SetForegroundColor(color(text.color)))?;
        // Labels shrink as they fade; a terminal can only drop the bold.
        if text.current_size() >= text.base_size / 2.0 {
            out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        out.queue(Print(&text.text))?;
        out.queue(style::SetAttribute(Attribute::Reset))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Status and hint (below the board) ────────────────────────────────────────

fn draw_status<W: Write>(out: &mut W, layout: &Layout, frame: &Snapshot) -> std::io::Result<()> {
    let status_row = layout.bottom() + 1;
    let col = layout
        .center_x()
        .saturating_sub(frame.status.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, status_row))?;
    out.queue(style::SetForegroundColor(C_STATUS))?;
    out.queue(Print(&frame.status))?;

    let hint = "WASD/Arrows: Move   SPACE: Pause   R: New Game   Q: Quit";
    let col = layout
        .center_x()
        .saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, status_row + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    layout: &Layout,
    lines: &[(String, Color)],
) -> std::io::Result<()> {
    let start_row = (layout.board_y() + layout.board_h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, fg)) in lines.iter().enumerate() {
        let col = layout
            .center_x()
            .saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetBackgroundColor(C_BOARD))?;
        out.queue(style::SetForegroundColor(*fg))?;
        out.queue(Print(msg))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, layout: &Layout, frame: &Snapshot) -> std::io::Result<()> {
    let red = Color::Rgb { r: 0xff, g: 0x44, b: 0x44 };
    let best_line = if frame.new_best {
        format!("★ NEW BEST: {} ★", frame.high_score)
    } else {
        format!("Best Score: {}", frame.high_score)
    };
    let lines = [
        ("╔════════════════════╗".to_string(), red),
        ("║     GAME  OVER     ║".to_string(), red),
        ("╚════════════════════╝".to_string(), red),
        (format!("Final Score: {}", frame.score), Color::White),
        (best_line, C_HUD_SCORE),
        ("Press 'R' to start a new game".to_string(), C_STATUS),
    ];
    draw_centered(out, layout, &lines)
}

fn draw_paused<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let lines = [
        ("  PAUSED  ".to_string(), C_HUD_SCORE),
        ("SPACE to continue".to_string(), C_STATUS),
    ];
    draw_centered(out, layout, &lines)
}

fn draw_too_small<W: Write>(out: &mut W, frame: &Snapshot, term: (u16, u16)) -> std::io::Result<()> {
    let need = format!(
        "Terminal too small: need {}x{}, have {}x{}",
        frame.cols * 2 + 2,
        frame.rows + CHROME_ROWS as i32,
        term.0,
        term.1
    );
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HIGH))?;
    out.queue(Print(need))?;
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Resize the window, or press Q to quit"))?;
    Ok(())
}
