use {
    once_cell::sync::Lazy,
    regex::Regex,
};

const PLATFORM_NAME: &str = "YouTube";

static FILE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.csv").expect("valid suffix regex"));
static WORD_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z0-9])").expect("valid boundary regex"));

/// Turns an export file name such as `GreatVideo2YouTube.csv` into a
/// readable title (`Great Video 2`).
pub fn normalize_title(file_name: &str) -> String {
    let title = FILE_SUFFIX.replace_all(file_name, "");
    let title = title.replace(PLATFORM_NAME, "");
    WORD_BOUNDARY.replace_all(&title, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_suffix_and_platform() {
        assert_eq!(normalize_title("GreatVideoYouTube.csv"), "Great Video");
    }

    #[test]
    fn test_digits_start_a_new_word() {
        assert_eq!(normalize_title("Top10Songs2023YouTube.csv"), "Top 10Songs 2023");
        assert_eq!(normalize_title("episode2"), "episode 2");
    }

    #[test]
    fn test_video_name_without_suffix() {
        assert_eq!(normalize_title("MyFirstVlog"), "My First Vlog");
    }

    #[test]
    fn test_unmatched_input_is_unchanged() {
        assert_eq!(normalize_title("plain title"), "plain title");
        assert_eq!(normalize_title("ALLCAPS"), "ALLCAPS");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_boundaries_do_not_overlap() {
        assert_eq!(normalize_title("aBcD"), "a Bc D");
    }
}
