//! Menu labels, prompts and messages in each supported language.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

use crate::actions::{ActionKind, ParamKind};
use crate::domain::NoteId;

/// Language used for the menu and prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default)
    #[default]
    En,
    /// Russian
    Ru,
}

impl Locale {
    /// Returns the menu label for an action.
    pub fn action_label(self, kind: ActionKind) -> &'static str {
        match (self, kind) {
            (Locale::En, ActionKind::Create) => "Create note",
            (Locale::En, ActionKind::WatchAll) => "Show all",
            (Locale::En, ActionKind::WatchNames) => "Show names",
            (Locale::En, ActionKind::SearchById) => "Find by number",
            (Locale::En, ActionKind::SearchByDate) => "Find by date",
            (Locale::En, ActionKind::SearchByName) => "Find by name",
            (Locale::En, ActionKind::SearchByKeywords) => "Find by keywords",
            (Locale::Ru, ActionKind::Create) => "Создать заметку",
            (Locale::Ru, ActionKind::WatchAll) => "Просмотреть все",
            (Locale::Ru, ActionKind::WatchNames) => "Просмотреть имена",
            (Locale::Ru, ActionKind::SearchById) => "Найти по номеру",
            (Locale::Ru, ActionKind::SearchByDate) => "Найти по дате",
            (Locale::Ru, ActionKind::SearchByName) => "Найти по имени",
            (Locale::Ru, ActionKind::SearchByKeywords) => "Найти по ключевым словам",
        }
    }

    pub fn exit_label(self) -> &'static str {
        match self {
            Locale::En => "Save and exit",
            Locale::Ru => "Сохранить и выйти",
        }
    }

    /// Prompt shown before reading a search parameter.
    pub fn param_prompt(self, param: ParamKind) -> &'static str {
        match (self, param) {
            (Locale::En, ParamKind::Id) => "Enter note number: ",
            (Locale::En, ParamKind::Name) => "Enter note name: ",
            (Locale::En, ParamKind::Date) => "Enter date (DD.MM.YYYY): ",
            (Locale::En, ParamKind::Keywords) => "Enter keywords: ",
            (Locale::Ru, ParamKind::Id) => "Введите номер заметки: ",
            (Locale::Ru, ParamKind::Name) => "Введите название заметки: ",
            (Locale::Ru, ParamKind::Date) => "Введите дату (ДД.ММ.ГГГГ): ",
            (Locale::Ru, ParamKind::Keywords) => "Введите ключевые слова: ",
        }
    }

    pub fn note_name_prompt(self) -> &'static str {
        self.param_prompt(ParamKind::Name)
    }

    pub fn note_text_prompt(self) -> &'static str {
        match self {
            Locale::En => "Enter note text (finish with a line containing only '.'):",
            Locale::Ru => "Введите текст заметки (завершите строкой из одной точки):",
        }
    }

    pub fn nothing_found(self) -> &'static str {
        match self {
            Locale::En => "Nothing found.",
            Locale::Ru => "Ничего не найдено.",
        }
    }

    pub fn created(self, id: NoteId) -> String {
        match self {
            Locale::En => format!("Created note {id}"),
            Locale::Ru => format!("Создана заметка {id}"),
        }
    }

    pub fn error(self, err: &dyn fmt::Display) -> String {
        match self {
            Locale::En => format!("error: {err}"),
            Locale::Ru => format!("ошибка: {err}"),
        }
    }
}
