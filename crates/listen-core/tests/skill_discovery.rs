use std::fs;
use tempfile::TempDir;

use listen_core::client::AssistantType;
use listen_core::skills::{TargetAssistants, discover_skills};

#[tokio::test]
async fn missing_root_yields_no_skills() {
    let temp = TempDir::new().unwrap();
    let skills = discover_skills(&temp.path().join("skills")).await;
    assert!(skills.is_empty());
}

#[tokio::test]
async fn only_directories_with_skill_md_are_skills() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("skills");
    fs::create_dir_all(root.join("real")).unwrap();
    fs::write(root.join("real/SKILL.md"), "---\nversion: 2.1.0\n---\n# Real\n").unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();
    fs::write(root.join("stray.md"), "# not a skill").unwrap();

    let skills = discover_skills(&root).await;

    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name, "real");
    assert_eq!(skills[0].version, "2.1.0");
    assert_eq!(skills[0].source_root, root.join("real"));
}

#[tokio::test]
async fn document_without_front_matter_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("skills");
    fs::create_dir_all(root.join("plain")).unwrap();
    fs::write(root.join("plain/SKILL.md"), "# Just markdown\n").unwrap();

    let skills = discover_skills(&root).await;

    assert_eq!(skills.len(), 1);
    let skill = &skills[0];
    assert_eq!(skill.name, "plain");
    assert_eq!(skill.description, "");
    assert_eq!(skill.version, "1.0.0");
    assert_eq!(skill.author, "");
    assert!(skill.tags.is_empty());
    assert_eq!(skill.targets, TargetAssistants::All);
}

#[tokio::test]
async fn front_matter_fields_populate_record() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("skills");
    fs::create_dir_all(root.join("dir-name")).unwrap();
    fs::write(
        root.join("dir-name/SKILL.md"),
        "---\nname: \"survey\"\ndescription: 'Analyze surveys'\nauthor: Data Team\ntags: [\"data\", stats]\ntargets: [claude, cursor]\n---\nBody\n",
    )
    .unwrap();

    let skills = discover_skills(&root).await;

    assert_eq!(skills.len(), 1);
    let skill = &skills[0];
    assert_eq!(skill.name, "survey");
    assert_eq!(skill.description, "Analyze surveys");
    assert_eq!(skill.author, "Data Team");
    assert_eq!(skill.tags, vec!["data", "stats"]);
    assert_eq!(
        skill.targets,
        TargetAssistants::Only(vec![AssistantType::Claude, AssistantType::Cursor])
    );
    assert_eq!(skill.primary_doc(), root.join("dir-name/SKILL.md"));
}

#[tokio::test]
async fn hidden_directories_are_ignored() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("skills");
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".git/SKILL.md"), "# not a skill").unwrap();
    fs::create_dir_all(root.join("visible")).unwrap();
    fs::write(root.join("visible/SKILL.md"), "# visible").unwrap();

    let skills = discover_skills(&root).await;

    let names: Vec<&str> = skills.iter().map(|skill| skill.name.as_str()).collect();
    assert_eq!(names, vec!["visible"]);
}

#[tokio::test]
async fn duplicate_declared_names_keep_one_skill() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("skills");
    for dir in ["first", "second"] {
        fs::create_dir_all(root.join(dir)).unwrap();
        fs::write(root.join(dir).join("SKILL.md"), "---\nname: shared\n---\n").unwrap();
    }

    let skills = discover_skills(&root).await;

    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name, "shared");
}

#[tokio::test]
async fn unsafe_declared_name_falls_back_to_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("skills");
    fs::create_dir_all(root.join("safe")).unwrap();
    fs::write(root.join("safe/SKILL.md"), "---\nname: ../../outside\n---\n").unwrap();

    let skills = discover_skills(&root).await;

    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name, "safe");
    assert_eq!(skills[0].source_root, root.join("safe"));
}
