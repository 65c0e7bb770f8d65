//! License agreement prompt shown before installing a pack that embeds one

use colored::Colorize;
use dialoguer::Select;

/// What the user decided after reading an embedded license.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseChoice {
    Accept,
    Decline,
    /// Save the license text next to the cached archive and stop
    Extract,
}

const CHOICES: [&str; 3] = ["Accept", "Decline", "Extract"];

impl LicenseChoice {
    fn from_index(index: usize) -> Self {
        match index {
            0 => LicenseChoice::Accept,
            2 => LicenseChoice::Extract,
            _ => LicenseChoice::Decline,
        }
    }
}

/// Show `license_text` and ask whether to accept it.
///
/// Without a terminal (or on any prompt failure) the license counts as declined.
pub fn prompt_license(pack: &str, license_text: &str) -> LicenseChoice {
    println!("{}", format!("License agreement for {}", pack).bold());
    println!();
    println!("{}", license_text.trim_end());
    println!();

    let index = Select::new()
        .with_prompt(format!("Do you accept the license of {}?", pack))
        .items(&CHOICES)
        .default(1)
        .interact()
        .unwrap_or(1);

    LicenseChoice::from_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_indexes_match_labels() {
        for (index, label) in CHOICES.iter().enumerate() {
            assert_eq!(format!("{:?}", LicenseChoice::from_index(index)), *label);
        }
    }

    #[test]
    fn test_out_of_range_is_decline() {
        assert_eq!(LicenseChoice::from_index(42), LicenseChoice::Decline);
    }
}
