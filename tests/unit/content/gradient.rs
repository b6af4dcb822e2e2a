use super::*;

#[test]
fn parses_from_via_to() {
    let g = GradientSpec::parse("from-purple-600 via-violet-600 to-indigo-600").unwrap();
    let roles: Vec<StopRole> = g.stops().iter().map(|s| s.role).collect();
    assert_eq!(roles, [StopRole::From, StopRole::Via, StopRole::To]);
    assert_eq!(g.stops()[1].color, "violet-600");
    assert_eq!(g, GradientSpec::three("purple-600", "violet-600", "indigo-600"));
}

#[test]
fn two_stops_and_extra_whitespace_are_fine() {
    let g: GradientSpec = "  from-purple-400   to-pink-400 ".parse().unwrap();
    assert_eq!(g.stops().len(), 2);
    assert_eq!(g.to_string(), "from-purple-400 to-pink-400");
}

#[test]
fn rejects_malformed_specs() {
    for bad in [
        "",
        "from-purple-600",
        "via-violet-600 to-indigo-600",
        "from-purple-600 via-violet-600",
        "from-purple-600 from-violet-600 to-indigo-600",
        "from- to-indigo-600",
        "bg-purple-600 to-indigo-600",
    ] {
        let err = GradientSpec::parse(bad).unwrap_err();
        assert!(err.to_string().starts_with("content error:"), "{bad}: {err}");
    }
}

#[test]
fn resolves_palette_colors_and_renders_css() {
    let g = GradientSpec::three("orange-500", "rose-500", "pink-600");
    assert_eq!(
        g.resolve().unwrap(),
        vec![
            Rgba8::rgb(0xf9, 0x73, 0x16),
            Rgba8::rgb(0xf4, 0x3f, 0x5e),
            Rgba8::rgb(0xdb, 0x27, 0x77),
        ]
    );
    assert_eq!(
        g.to_css().unwrap(),
        "linear-gradient(45deg, #f97316, #f43f5e, #db2777)"
    );
}

#[test]
fn unknown_palette_names_fail_to_resolve() {
    let g = GradientSpec::parse("from-purple-600 to-plaid-7").unwrap();
    let err = g.resolve().unwrap_err();
    assert!(err.to_string().contains("plaid-7"));
    assert_eq!(palette_color("plaid-7"), None);
}

#[test]
fn serde_uses_the_spec_string() {
    let g = GradientSpec::three("emerald-600", "teal-600", "cyan-600");
    let json = serde_json::to_string(&g).unwrap();
    assert_eq!(json, "\"from-emerald-600 via-teal-600 to-cyan-600\"");
    let back: GradientSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, g);
    assert!(serde_json::from_str::<GradientSpec>("\"to-x from-y\"").is_err());
}
