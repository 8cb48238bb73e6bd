use std::io::IsTerminal;

use clap::{ValueEnum, builder::styling::Ansi256Color};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// Colors of every console role for one theme.
struct Palette {
  timestamp: Color,
  primary: Color,
  accent: Color,
  info: Color,
  success: Color,
  label: Color,
  value: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

const DARK: Palette = Palette {
  timestamp: rgb(118, 166, 166),
  primary: rgb(191, 126, 4),
  accent: rgb(166, 84, 55),
  info: rgb(118, 166, 166),
  success: rgb(118, 166, 166),
  label: rgb(217, 164, 4),
  value: rgb(242, 211, 56),
};

const LIGHT: Palette = Palette {
  timestamp: rgb(92, 62, 38),
  primary: rgb(70, 42, 25),
  accent: rgb(211, 99, 70),
  info: rgb(40, 111, 170),
  success: rgb(34, 142, 90),
  label: rgb(176, 103, 66),
  value: rgb(199, 146, 76),
};

/// Console colors for progress output and tables. When disabled every role
/// resolves to [`Color::Reset`].
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn palette(&self) -> &'static Palette {
    match self.theme {
      Theme::Dark => &DARK,
      Theme::Light => &LIGHT,
    }
  }

  const fn pick(&self, color: Color) -> Color {
    if self.enabled { color } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(self.palette().timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(self.palette().primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(self.palette().accent)
  }

  pub const fn info(&self) -> Color {
    self.pick(self.palette().info)
  }

  pub const fn success(&self) -> Color {
    self.pick(self.palette().success)
  }

  pub const fn label(&self) -> Color {
    self.pick(self.palette().label)
  }

  pub const fn value(&self) -> Color {
    self.pick(self.palette().value)
  }

  const fn to_clap(color: Color) -> Option<clap::builder::styling::Color> {
    use clap::builder::styling::{AnsiColor, Color as ClapColor, RgbColor};

    match color {
      Color::Black => Some(ClapColor::Ansi(AnsiColor::Black)),
      Color::Blue | Color::DarkBlue => Some(ClapColor::Ansi(AnsiColor::Blue)),
      Color::Cyan | Color::DarkCyan => Some(ClapColor::Ansi(AnsiColor::Cyan)),
      Color::DarkGreen | Color::Green => Some(ClapColor::Ansi(AnsiColor::Green)),
      Color::DarkGrey | Color::Grey => Some(ClapColor::Ansi(AnsiColor::BrightBlack)),
      Color::DarkMagenta | Color::Magenta => Some(ClapColor::Ansi(AnsiColor::Magenta)),
      Color::DarkRed | Color::Red => Some(ClapColor::Ansi(AnsiColor::Red)),
      Color::DarkYellow | Color::Yellow => Some(ClapColor::Ansi(AnsiColor::Yellow)),
      Color::White => Some(ClapColor::Ansi(AnsiColor::White)),
      Color::AnsiValue(val) => Some(ClapColor::Ansi256(Ansi256Color(val))),
      Color::Rgb { r, g, b } => Some(ClapColor::Rgb(RgbColor(r, g, b))),
      Color::Reset => None,
    }
  }

  /// Help output styles, always drawn from the dark palette.
  pub const fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{Style, Styles};

    let colors = Self::new(true, Theme::Dark);

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Self::to_clap(colors.label())))
      .usage(Style::new().bold().fg_color(Self::to_clap(colors.label())))
      .literal(Style::new().fg_color(Self::to_clap(colors.success())))
      .placeholder(Style::new().fg_color(Self::to_clap(colors.info())))
      .error(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
      .valid(Style::new().fg_color(Self::to_clap(colors.success())))
      .invalid(Style::new().bold().fg_color(Self::to_clap(colors.accent())))
  }
}

/// Table cell color for a console color. Only the variants the palette uses
/// need an exact match.
pub fn table_color(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(val) => ComfyColor::AnsiValue(val),
    _ => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

fn detect_terminal_theme() -> Theme {
  std::env::var("COLORFGBG")
    .ok()
    .as_deref()
    .and_then(theme_from_colorfgbg)
    .unwrap_or(Theme::Dark)
}

/// `COLORFGBG` is `fg;bg`; backgrounds 8 and above are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
  let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
  Some(if bg >= 8 { Theme::Light } else { Theme::Dark })
}
