use predicates::str::{contains, diff};

#[test]
fn price_free_tier_renders_free() {
    let expected = concat!(
        "Requests: 10,000 per month\n",
        "Estimated cost: Free\n",
        "Plan: Starter (Free)\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args(["price", "--requests", "10000"]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn price_pro_tier_is_flat() {
    let expected = concat!(
        "Requests: 10,001 per month\n",
        "Estimated cost: $99.00/month\n",
        "Plan: Pro\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args(["price", "--requests", "10001"]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn price_enterprise_adds_overage() {
    let expected = concat!(
        "Requests: 200,000 per month\n",
        "Estimated cost: $199.00/month\n",
        "Plan: Enterprise\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args(["price", "--requests", "200000"]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn price_json_is_stable() {
    let expected = concat!(
        "{\n",
        "  \"requests\": 200000,\n",
        "  \"cost\": 199.0,\n",
        "  \"tier\": \"enterprise\"\n",
        "}\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args(["price", "--requests", "200000", "--format", "json"]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn models_listing_is_stable() {
    let expected = concat!(
        "gpt-3.5-turbo (openai)\n",
        "gpt-4 (openai)\n",
        "claude-v1 (anthropic)\n",
        "llama-2-70b (meta)\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args(["models"]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn prompts_list_the_site_examples() {
    let expected = concat!(
        "Try: Explain quantum computing in simple terms\n",
        "Try: Write a Python function to reverse a string\n",
        "Try: What are the benefits of cloud computing?\n",
        "Try: Generate a business plan outline for a startup\n",
        "Try: Explain machine learning to a 5-year-old\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args(["prompts"]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn seeded_chat_runs_are_reproducible() {
    let args = [
        "chat",
        "--message",
        "Explain quantum computing in simple terms",
        "--model",
        "gpt-4",
        "--seed",
        "42",
        "--no-delay",
    ];

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args(args);
    let first = cmd.output().expect("command should run");
    assert!(first.status.success());

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args(args);
    let second = cmd.output().expect("command should run");
    assert!(second.status.success());

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn chat_footer_names_the_model() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args([
        "chat",
        "--message",
        "hello",
        "--model",
        "claude-v1",
        "--seed",
        "7",
        "--no-delay",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("Model: claude-v1 | Tokens: "));
}

#[test]
fn unknown_model_falls_back_silently() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args([
        "chat",
        "--message",
        "hello",
        "--model",
        "mistral-7b",
        "--no-delay",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("Hello! I'm here to help you with any questions"))
        .stdout(contains("Model: mistral-7b"));
}

#[test]
fn json_chat_emits_completion_envelope() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args([
        "chat",
        "--message",
        "hello",
        "--model",
        "gpt-4",
        "--seed",
        "42",
        "--no-delay",
        "--format",
        "json",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("\"role\": \"assistant\""))
        .stdout(contains("\"model\": \"gpt-4\""))
        .stdout(contains("\"total_tokens\""));
}

#[test]
fn streamed_chat_prints_reply_and_footer() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helix-sim");
    cmd.args([
        "chat",
        "--message",
        "hello",
        "--model",
        "gpt-4",
        "--seed",
        "42",
        "--no-delay",
        "--stream",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("GPT-4"))
        .stdout(contains("Model: gpt-4 | Tokens: "));
}
