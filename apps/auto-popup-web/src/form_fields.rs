/// Normalizes raw form entry names: trims them, drops blanks, and keeps the first occurrence
/// of repeated names such as checkbox groups.
pub(crate) fn summarize_field_names<I>(raw_names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut names: Vec<String> = Vec::new();
    for raw in raw_names {
        let name = raw.trim();
        if name.is_empty() || names.iter().any(|existing| existing == name) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_repeated_and_blank_names() {
        let raw = ["email", " interests ", "interests", "", "name"]
            .into_iter()
            .map(String::from);
        assert_eq!(
            summarize_field_names(raw),
            vec!["email".to_string(), "interests".to_string(), "name".to_string()]
        );
    }
}
