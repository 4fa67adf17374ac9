//! Integration tests: raw lines on stdin, rendered messages on stdout.

mod common;

use common::TestFeed;

const SESSION: &[&str] = &[
    ":tmi.twitch.tv 001 justinfan12345 :Welcome, GLHF!",
    ":tmi.twitch.tv CAP * ACK :twitch.tv/tags",
    ":justinfan12345!justinfan12345@justinfan12345.tmi.twitch.tv JOIN #channel",
    "@display-name=Foo;color=#112233;emotes=25:0-1 :tester!tester@tester.tmi.twitch.tv PRIVMSG #channel :Kappa hello",
    "PING :tmi.twitch.tv",
    "@display-name=;color= :anon!anon@anon.tmi.twitch.tv PRIVMSG #channel :no tags here",
    ":empty!empty@empty.tmi.twitch.tv PRIVMSG #channel :",
    "@display-name=Bar\\sBaz;emotes=25:0-1/1902:6-7 :bar!bar@bar.tmi.twitch.tv PRIVMSG #channel :Kappa Keepo",
];

#[test]
fn test_session_renders_chat_lines_in_order() {
    let feed = TestFeed::with_config("[pipeline]\ndrain_interval_ms = 5\n")
        .expect("Failed to write config");
    let output = feed.run(SESSION).expect("Failed to run chatfeed");
    assert!(output.success, "chatfeed failed: {}", output.stderr);

    let lines = output.json_lines();
    assert_eq!(lines.len(), 3, "unexpected output: {}", output.stdout);

    assert_eq!(lines[0]["sender_name"], "Foo");
    assert_eq!(lines[0]["message"], "Kappa hello");
    assert_eq!(lines[0]["sender_display_color"], "#112233");
    assert_eq!(lines[0]["emotes"]["25"], "Ka");

    assert_eq!(lines[1]["sender_name"], "Unknown");
    assert_eq!(lines[1]["sender_display_color"], "#FFFFFF");
    assert_eq!(lines[1]["message"], "no tags here");

    assert_eq!(lines[2]["sender_name"], "Bar Baz");
    assert_eq!(lines[2]["emotes"]["25"], "Ka");
    assert_eq!(lines[2]["emotes"]["1902"], "Ke");
}

#[test]
fn test_defaults_without_config_file() {
    let output = TestFeed::with_defaults()
        .run(&[":a!a@a.tmi.twitch.tv PRIVMSG #c :hello"])
        .expect("Failed to run chatfeed");
    assert!(output.success, "chatfeed failed: {}", output.stderr);

    let lines = output.json_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["message"], "hello");
}

#[test]
fn test_text_output() {
    let feed = TestFeed::with_config(
        r#"
[pipeline]
drain_interval_ms = 5

[output]
format = "text"
"#,
    )
    .expect("Failed to write config");

    let output = feed.run(SESSION).expect("Failed to run chatfeed");
    assert!(output.success, "chatfeed failed: {}", output.stderr);
    assert_eq!(
        output.stdout,
        "Foo: Kappa hello\nUnknown: no tags here\nBar Baz: Kappa Keepo\n"
    );
}

#[test]
fn test_strict_mode_drops_malformed_tags() {
    let feed = TestFeed::with_config(
        r#"
[pipeline]
drain_interval_ms = 5

[normalizer]
strict = true
"#,
    )
    .expect("Failed to write config");

    let output = feed
        .run(&[
            "@color=#GGGGGG :a!a@a PRIVMSG #c :bad color",
            "@emotes=25:0-99 :a!a@a PRIVMSG #c :short",
            "@color=#00FF00;emotes=25:0-4 :a!a@a PRIVMSG #c :Kappa ok",
        ])
        .expect("Failed to run chatfeed");
    assert!(output.success, "chatfeed failed: {}", output.stderr);

    let lines = output.json_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["message"], "Kappa ok");
    assert_eq!(lines[0]["emotes"]["25"], "Kappa");
}

#[test]
fn test_many_lines_small_batches() {
    let owned: Vec<String> = (0..200)
        .map(|i| format!(":u!u@u PRIVMSG #c :line {i}"))
        .collect();
    let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

    let feed = TestFeed::with_config("[pipeline]\ndrain_interval_ms = 1\nmax_batch = 7\n")
        .expect("Failed to write config");
    let output = feed.run(&lines).expect("Failed to run chatfeed");
    assert!(output.success, "chatfeed failed: {}", output.stderr);

    let bodies: Vec<String> = output
        .json_lines()
        .iter()
        .map(|v| v["message"].as_str().unwrap_or_default().to_string())
        .collect();
    let expected: Vec<String> = (0..200).map(|i| format!("line {i}")).collect();
    assert_eq!(bodies, expected);
}

#[test]
fn test_invalid_config_exits_with_error() {
    let feed = TestFeed::with_config("[pipeline]\nmax_batch = 0\n").expect("Failed to write config");
    let output = feed.run(&[]).expect("Failed to run chatfeed");
    assert!(!output.success);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("max_batch"), "stderr: {}", output.stderr);
}
