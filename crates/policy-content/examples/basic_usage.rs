//! Basic usage example for policy-content

use policy_content::{NormalizationProfile, SuppressConfig, Suppressor, compare, structural};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let observed = r#"<policies><inbound><set-variable name="token" value="@(context.Request.Headers.GetValueOrDefault(&quot;x-token&quot;,&quot;&quot;))" /></inbound></policies>"#;
    let declared = r#"<policies>
  <inbound>
    <set-variable name="token" value="@(context.Request.Headers.GetValueOrDefault("x-token",""))" />
  </inbound>
</policies>"#;

    // The declared document is not well-formed, so the fallback decides
    for profile in NormalizationProfile::all() {
        let outcome = compare(observed, declared, *profile);
        println!(
            "{profile}: equivalent={} via {}",
            outcome.is_equivalent, outcome.strategy
        );
    }

    // Well-formed documents compare structurally
    let tree = structural::canonicalize(observed)?;
    println!("\nCanonical tree:\n{}", serde_json::to_string_pretty(&tree)?);

    // Field-level suppression as a reconciliation framework would call it
    let mut config = SuppressConfig::api_management();
    config.merge(&SuppressConfig::parse(
        r#"
[fields]
"api_policy.xml_content" = "entity-aware"
"#,
    )?);
    let suppressor = Suppressor::new(config);
    for field in ["policy.0.xml_content", "api_policy.xml_content"] {
        let suppressed = suppressor.suppress(field, observed, declared, &());
        println!("\nSuppress update of {field}: {suppressed}");
    }

    Ok(())
}
