use chrono::{TimeZone, Utc};
use notify_cardkit::{AvatarSource, CardBuilder, RunContext};
use serde_json::Value;

struct NoAvatar;

impl AvatarSource for NoAvatar {
    fn data_uri(&self, _url: &str) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("offline"))
    }
}

#[test]
fn smoke_full_card_shape() {
    let ctx: RunContext = [
        ("DRONE_BUILD_STATUS", "success"),
        ("CI_REPO", "acme/widget"),
        ("CI_REPO_URL", "https://forge.example.com/acme/widget"),
        ("CI_COMMIT_TAG", "v1.4.0"),
        ("CI_COMMIT_AUTHOR", "octocat"),
        ("CI_COMMIT_MESSAGE", "release: v1.4.0"),
        ("CI_PIPELINE_URL", "https://ci.example.com/builds/99"),
        ("PLUGIN_VARIABLES", "DEPLOY_ENV"),
        ("DEPLOY_ENV", "staging"),
    ]
    .into_iter()
    .collect();

    let now = Utc.with_ymd_and_hms(2024, 5, 4, 12, 30, 0).unwrap();
    let output = CardBuilder::new(&ctx, now).build(&NoAvatar);
    assert!(output.warnings.is_empty(), "no avatar reference, no warnings");

    let value: Value = serde_json::to_value(&output.card).expect("card should serialize");
    assert_eq!(value["type"], "message");

    let attachment = &value["attachments"][0];
    assert_eq!(attachment["contentType"], "application/vnd.microsoft.card.adaptive");
    assert!(attachment["contentUrl"].is_null());

    let content = &attachment["content"];
    assert_eq!(content["$schema"], "http://adaptivecards.io/schemas/adaptive-card.json");
    assert_eq!(content["type"], "AdaptiveCard");
    assert_eq!(content["version"], "1.5");

    let header = &content["body"][0];
    assert_eq!(header["type"], "Container");
    assert_eq!(header["style"], "good");
    assert_eq!(header["items"][0]["text"], "✔ Pipeline succeeded");
    assert_eq!(header["items"][1]["columns"][1]["items"][0]["text"], "@octocat");

    let fact_titles: Vec<&str> = content["body"][1]["items"][0]["facts"]
        .as_array()
        .expect("facts should be an array")
        .iter()
        .map(|fact| fact["title"].as_str().unwrap())
        .collect();
    assert_eq!(fact_titles, vec!["Project:", "Message:", "Version:"]);

    assert_eq!(content["body"][2]["text"], "Variables:");
    let table = &content["body"][3];
    assert_eq!(table["type"], "Table");
    assert_eq!(table["showGridLines"], false);
    assert_eq!(table["firstRowAsHeaders"], false);
    assert_eq!(table["rows"][0]["cells"][1]["items"][0]["text"], "staging");
    assert_eq!(table["rows"][0]["cells"][1]["items"][0]["fontType"], "Monospace");

    let actions = content["actions"].as_array().expect("actions should be an array");
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["type"], "Action.OpenUrl");
    assert_eq!(actions[0]["title"], "View Pipeline");
    assert_eq!(actions[1]["title"], "View Release");
    assert_eq!(
        actions[1]["url"],
        "https://forge.example.com/acme/widget/releases/tag/v1.4.0"
    );
}
