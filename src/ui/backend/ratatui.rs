use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Terminal;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::tui::crossterm::into_input;
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::input::Input;
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, ColorPair, Mod, Style};

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

/// The real terminal: ratatui over crossterm on stdout.
///
/// Expects the terminal to already be in raw mode on the alternate screen
/// (see `tui::session::Session`).
pub struct TerminalBackend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    pairs: Vec<Option<(Color, Color)>>,
}

impl TerminalBackend {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            pairs: Vec::new(),
        })
    }
}

impl Backend for TerminalBackend {
    fn size(&self) -> io::Result<Rect> {
        let (w, h) = crossterm::terminal::size()?;
        Ok(Rect::new(0, 0, w, h))
    }

    fn init_pair(&mut self, pair: ColorPair, fg: Color, bg: Color) {
        let slot = usize::from(pair.0);
        if self.pairs.len() <= slot {
            self.pairs.resize(slot + 1, None);
        }
        self.pairs[slot] = Some((fg, bg));
    }

    fn draw(&mut self, _area: Rect, cmds: &[PaintCmd]) -> io::Result<()> {
        let pairs = &self.pairs;
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(PaintWidget { cmds, pairs }, area);
        })?;
        Ok(())
    }

    fn read_input(&mut self) -> io::Result<Input> {
        loop {
            if let Some(input) = into_input(crossterm::event::read()?) {
                return Ok(input);
            }
        }
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.terminal.hide_cursor()
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
    pairs: &'a [Option<(Color, Color)>],
}

impl PaintWidget<'_> {
    fn style(&self, s: Style) -> RStyle {
        let mut out = RStyle::default();
        if let Some(Some((fg, bg))) = self.pairs.get(usize::from(s.pair.0)) {
            out = out.fg(to_ratatui_color(*fg)).bg(to_ratatui_color(*bg));
        }
        out.add_modifier(to_ratatui_mods(s.mods))
    }
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        for cmd in self.cmds {
            match cmd {
                PaintCmd::FillRect { rect, style } => fill_rect(buf, *rect, self.style(*style)),
                PaintCmd::HLine { pos, len, ch, style } => {
                    draw_hline(buf, *pos, *len, *ch, self.style(*style))
                }
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => draw_text(buf, *pos, text, self.style(*style), *clip),
                PaintCmd::Border { rect, style } => draw_border(buf, *rect, self.style(*style)),
            }
        }
    }
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Black => RColor::Black,
        Color::Red => RColor::Red,
        Color::Green => RColor::Green,
        Color::Yellow => RColor::Yellow,
        Color::Blue => RColor::Blue,
        Color::Magenta => RColor::Magenta,
        Color::Cyan => RColor::Cyan,
        Color::White => RColor::White,
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    // No standout attribute of its own: reverse + bold.
    if m.contains(Mod::STANDOUT) {
        out |= RModifier::REVERSED | RModifier::BOLD;
    }
    out
}

fn fill_rect(buf: &mut Buffer, rect: Rect, style: RStyle) {
    if rect.is_empty() {
        return;
    }
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_style(style);
            }
        }
    }
}

fn draw_hline(buf: &mut Buffer, pos: Pos, len: u16, ch: char, style: RStyle) {
    let right = pos.x.saturating_add(len);
    for x in pos.x..right {
        if let Some(cell) = buf.cell_mut((x, pos.y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: RStyle, clip: Option<Rect>) {
    // Default clip is the buffer area so we never partially render wide glyphs at the edge.
    let clip = clip.unwrap_or_else(|| buf.area.into());
    let mut x = pos.x;
    let y = pos.y;
    if y < clip.y || y >= clip.bottom() {
        return;
    }
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= clip.right() {
            break;
        }
        // Do not partially render wide glyphs.
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= clip.right() {
            break;
        }
        if !clip.contains(Pos::new(x, y)) {
            x = x.saturating_add(w);
            continue;
        }

        let Some(cell) = buf.cell_mut((x, y)) else {
            break;
        };
        cell.set_symbol(g).set_style(style);

        for dx in 1..w {
            let xx = x.saturating_add(dx);
            if !clip.contains(Pos::new(xx, y)) {
                break;
            }
            let Some(cell) = buf.cell_mut((xx, y)) else {
                break;
            };
            cell.set_char(' ').set_style(style);
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: RStyle) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }

    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let mut put = |x: u16, y: u16, ch: char| {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
    };

    put(rect.x, rect.y, '┌');
    put(right, rect.y, '┐');
    put(rect.x, bottom, '└');
    put(right, bottom, '┘');
    for x in rect.x + 1..right {
        put(x, rect.y, '─');
        put(x, bottom, '─');
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, '│');
        put(right, y, '│');
    }
}
