//! The two persisted page preferences: colour theme and display language.

use crate::error::BackdropError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";
pub const LANG_KEY: &str = "lang";

/// String key-value storage (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, BackdropError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), BackdropError>;
}

impl PreferenceStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Result<Option<String>, BackdropError> {
        Ok(HashMap::get(self, key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackdropError> {
        self.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Text direction for the document root.
    pub fn direction(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Chooses between the English and Arabic variants of a string.
    pub fn pick<'a>(self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Ar => ar,
        }
    }
}

/// An unrecognised stored preference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue(pub String);

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown preference value {:?}", self.0)
    }
}

impl FromStr for Theme {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownValue(other.to_owned())),
        }
    }
}

impl FromStr for Language {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(UnknownValue(other.to_owned())),
        }
    }
}

/// Current theme and language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// Reads both flags. Missing or unrecognised values fall back to the
    /// defaults (light, English).
    pub fn load<P: PreferenceStore + ?Sized>(store: &P) -> Result<Self, BackdropError> {
        Ok(Self {
            theme: read(store, THEME_KEY)?,
            language: read(store, LANG_KEY)?,
        })
    }

    pub fn toggle_theme<P: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut P,
    ) -> Result<Theme, BackdropError> {
        self.theme = self.theme.toggled();
        store.set(THEME_KEY, self.theme.as_str())?;
        log::debug!("theme -> {}", self.theme.as_str());
        Ok(self.theme)
    }

    pub fn toggle_language<P: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut P,
    ) -> Result<Language, BackdropError> {
        self.language = self.language.toggled();
        store.set(LANG_KEY, self.language.as_str())?;
        log::debug!("lang -> {}", self.language.as_str());
        Ok(self.language)
    }
}

fn read<P, T>(store: &P, key: &str) -> Result<T, BackdropError>
where
    P: PreferenceStore + ?Sized,
    T: FromStr<Err = UnknownValue> + Default,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    Ok(raw.parse().unwrap_or_else(|e: UnknownValue| {
        log::warn!("ignoring stored {key}: {e}");
        T::default()
    }))
}
