use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use hyper::HeaderMap;
use serde::{Deserialize, Serialize};

/// Light or dark rendering of the page, remembered in a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const COOKIE: &'static str = "theme";

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Reads the mode from the request cookies, falling back to light.
    pub fn from_jar(jar: &CookieJar) -> Self {
        jar.get(Self::COOKIE)
            .and_then(|cookie| Self::parse(cookie.value()))
            .unwrap_or_default()
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::from_jar(&CookieJar::from_headers(headers))
    }

    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build((Self::COOKIE, self.as_str()))
            .path("/")
            .same_site(SameSite::Lax)
            .permanent()
            .build()
    }

    /// Class applied to the `<html>` element; tailwind keys dark variants on it.
    pub fn root_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label of the toggle button, naming the mode it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Modo oscuro",
            ThemeMode::Dark => "Modo claro",
        }
    }
}

pub struct Color {
    // css classes for each mode
    light: &'static str,
    dark: &'static str,
}

impl Color {
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self { light, dark }
    }

    pub fn light(&self) -> &'static str {
        self.light
    }

    pub fn dark(&self) -> &'static str {
        self.dark
    }

    /// Both palettes as one class list, dark classes behind the `dark:` variant.
    pub fn classes(&self) -> String {
        let dark = self
            .dark
            .split_whitespace()
            .map(|class| format!("dark:{class}"));

        self.light
            .split_whitespace()
            .map(str::to_owned)
            .chain(dark)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub trait Theme {
    fn background(&self) -> Color {
        Color::new("bg-white text-gray-900", "bg-gray-900 text-gray-100")
    }
    fn surface(&self) -> Color {
        Color::new("bg-gray-100 shadow", "bg-gray-800 shadow-none")
    }
    fn heading(&self) -> Color {
        Color::new("text-slate-800", "text-slate-100")
    }
    fn muted(&self) -> Color {
        Color::new("text-slate-600", "text-slate-300")
    }
    fn primary(&self) -> Color {
        Color::new("bg-sky-600 hover:bg-sky-700 text-white", "bg-sky-500 hover:bg-sky-400")
    }
    fn danger(&self) -> Color {
        Color::new("bg-red-500 hover:bg-red-600 text-white", "bg-red-600 hover:bg-red-500")
    }
    fn error(&self) -> Color {
        Color::new("text-red-700", "text-red-300")
    }
    fn input(&self) -> Color {
        Color::new("border border-gray-300 bg-white", "border-gray-600 bg-gray-700 text-gray-100")
    }
    fn navigation(&self) -> Color {
        Color::new("bg-gray-800", "bg-black")
    }
}

/// The palette used by the court search pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourtTheme;

impl Theme for CourtTheme {}
