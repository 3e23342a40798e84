use super::*;

fn selected(name: &str, pct: u32) -> SelectedLanguage {
    SelectedLanguage {
        name: name.to_string(),
        bytes: 1,
        pct,
    }
}

mod abbreviation_tests {
    use super::*;

    #[test]
    fn known_languages_use_table() {
        assert_eq!(abbreviation("JavaScript"), "JS");
        assert_eq!(abbreviation("TypeScript"), "TS");
        assert_eq!(abbreviation("Python"), "PY");
        assert_eq!(abbreviation("C#"), "C#");
        assert_eq!(abbreviation("C++"), "C++");
    }

    #[test]
    fn short_names_are_uppercased_whole() {
        assert_eq!(abbreviation("Go"), "GO");
        assert_eq!(abbreviation("Lua"), "LUA");
        assert_eq!(abbreviation("R"), "R");
    }

    #[test]
    fn long_names_use_first_two_chars() {
        assert_eq!(abbreviation("Rust"), "RU");
        assert_eq!(abbreviation("Kotlin"), "KO");
        assert_eq!(abbreviation("Objective-C"), "OB");
    }

    #[test]
    fn non_ascii_names_are_char_safe() {
        assert_eq!(abbreviation("Ädä"), "ÄDÄ");
        assert_eq!(abbreviation("Élixir"), "ÉL");
    }
}

#[test]
fn resolves_icon_and_brand_color() {
    let resolver = PresentationResolver::new(IconRegistry::builtin().unwrap());

    let item = resolver.resolve(&selected("Go", 60));

    assert_eq!(item.name, "Go");
    assert_eq!(item.pct, 60);
    assert_eq!(item.abbreviation, "GO");
    assert_eq!(item.accent_color, "#00add8");
    assert_eq!(item.icon.unwrap().slug, "go");
}

#[test]
fn unknown_language_gets_monogram_and_default_color() {
    let resolver = PresentationResolver::new(IconRegistry::builtin().unwrap());

    let item = resolver.resolve(&selected("Brainfuck", 5));

    assert!(item.icon.is_none());
    assert_eq!(item.abbreviation, "BR");
    assert_eq!(item.accent_color, DEFAULT_ACCENT);
}

#[test]
fn table_color_without_icon() {
    let resolver = PresentationResolver::new(IconRegistry::new());

    let item = resolver.resolve(&selected("Vue", 12));

    assert!(item.icon.is_none());
    assert_eq!(item.accent_color, "#41b883");
}

#[test]
fn resolve_all_keeps_order() {
    let resolver = PresentationResolver::new(IconRegistry::builtin().unwrap());

    let items = resolver.resolve_all(&[selected("Rust", 70), selected("Zig", 30)]);

    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Rust", "Zig"]);
    assert!(items.iter().all(|i| i.accent_color.starts_with('#')));
}
