use super::*;
use crate::content::gradient::GradientSpec;

#[test]
fn builtin_content_matches_the_page() {
    let c = PortfolioContent::builtin();
    assert_eq!(c.profile().name, "Jacell Jamble");
    assert_eq!(c.profile().location, "Mumbai, India");
    assert_eq!(c.projects().len(), 4);
    assert_eq!(c.achievements().len(), 8);
    assert_eq!(c.skills().len(), 8);
    assert_eq!(c.hero_stats().len(), 4);
    assert_eq!(c.focus_areas().len(), 3);
    c.validate().unwrap();
}

#[test]
fn project_order_and_tags_are_preserved() {
    let c = PortfolioContent::builtin();
    let names: Vec<&str> = c.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["HealthLock", "BankFlow", "WealthGrow", "LatteHeaven"]);
    assert_eq!(
        c.projects()[0].tech,
        ["React", "Node.js", "MongoDB", "TensorFlow.js", "WebRTC"]
    );
    let featured: Vec<&str> = c.featured_projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(featured, ["HealthLock", "BankFlow"]);
}

#[test]
fn skill_categories_keep_display_order() {
    let c = PortfolioContent::builtin();
    let labels: Vec<&str> = c.skills().iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Frontend", "Backend", "Database", "Design", "Programming", "Web3", "DevOps", "Other"]
    );
    assert_eq!(
        c.skill_category("Web3").unwrap().skills,
        ["Solidity", "MetaMask", "Remix IDE", "Hardhat"]
    );
    assert!(c.skill_category("Cooking").is_none());
}

#[test]
fn json_export_roundtrips_through_validation() {
    let c = PortfolioContent::builtin();
    let json = c.to_json_pretty().unwrap();
    assert!(json.contains("\"gradient\": \"from-purple-600 via-violet-600 to-indigo-600\""));
    assert!(!json.contains("\"image\""));
    let back = PortfolioContent::from_json_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn unknown_palette_color_is_rejected_on_load() {
    let mut c = PortfolioContent::builtin();
    c.projects[1].gradient = GradientSpec::three("emerald-600", "mauve-900", "cyan-600");
    let err = c.validate().unwrap_err();
    assert!(err.to_string().starts_with("content error:"));
    assert!(err.to_string().contains("BankFlow"));

    let json = serde_json::to_string(&c).unwrap();
    assert!(PortfolioContent::from_json_str(&json).is_err());
}

#[test]
fn malformed_gradient_fails_deserialization() {
    let mut v = serde_json::to_value(PortfolioContent::builtin()).unwrap();
    v["projects"][0]["gradient"] = serde_json::Value::from("purple-600 to-indigo-600");
    let err = PortfolioContent::from_json_str(&v.to_string()).unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn focus_levels_above_one_hundred_are_rejected() {
    let mut c = PortfolioContent::builtin();
    c.focus_areas[0].level = 120;
    assert!(c.validate().is_err());
}
