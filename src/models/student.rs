// src/models/student.rs

use serde::{Deserialize, Serialize};

/// The student taking a quiz. Immutable once built from the login form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub roll: String,
    pub category: String,
    pub difficulty: String,

    /// Local time of login, human readable.
    pub date: String,
}

/// Form submitted from the login panel.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
}

impl Student {
    /// Name and roll are trimmed; nothing else is validated, empty values included.
    pub fn from_form(form: LoginForm, date: String) -> Self {
        Self {
            name: form.name.trim().to_string(),
            roll: form.roll.trim().to_string(),
            category: form.category,
            difficulty: form.difficulty,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_name_and_roll_only() {
        let form = LoginForm {
            name: "  Ada  ".to_string(),
            roll: "\t42 ".to_string(),
            category: " Science".to_string(),
            difficulty: "easy".to_string(),
        };
        let student = Student::from_form(form, "2026-10-18 10:00:00".to_string());
        assert_eq!(student.name, "Ada");
        assert_eq!(student.roll, "42");
        assert_eq!(student.category, " Science");
    }

    #[test]
    fn accepts_empty_fields() {
        let student = Student::from_form(LoginForm::default(), String::new());
        assert_eq!(student.name, "");
        assert_eq!(student.difficulty, "");
    }
}
