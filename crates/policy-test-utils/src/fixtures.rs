//! Policy document fixtures.
//!
//! Each base document comes with variants that should compare equivalent
//! (reformatted, escaped) and one that carries a real change.
//!
//! The `INTERPOLATED_*` documents embed `@(...)` expressions with quotes in
//! attribute values and generic brackets in text, so they are not well-formed
//! XML and only the textual fallback can compare them.

/// A well-formed policy document
pub const POLICY: &str = r#"<policies>
  <inbound>
    <base />
    <set-header name="X-Env" exists-action="override">
      <value>prod</value>
    </set-header>
    <rate-limit calls="20" renewal-period="90" />
  </inbound>
  <backend>
    <forward-request />
  </backend>
  <outbound>
    <base />
  </outbound>
</policies>"#;

/// [`POLICY`] with different layout, attribute order and section order
pub const POLICY_REFORMATTED: &str = "<policies><outbound><base/></outbound>\r\n\
<inbound>\n\t<base/>\n\t<set-header exists-action=\"override\" name=\"X-Env\">\
<value>\n\t\tprod\n\t</value></set-header>\n\t<rate-limit renewal-period=\"90\" calls=\"20\"/>\n\
</inbound><backend><forward-request/></backend></policies>";

/// [`POLICY`] with a changed rate limit
pub const POLICY_CHANGED: &str = r#"<policies>
  <inbound>
    <base />
    <set-header name="X-Env" exists-action="override">
      <value>prod</value>
    </set-header>
    <rate-limit calls="50" renewal-period="90" />
  </inbound>
  <backend>
    <forward-request />
  </backend>
  <outbound>
    <base />
  </outbound>
</policies>"#;

/// A policy document with interpolations that break well-formedness
pub const INTERPOLATED_POLICY: &str = r#"<policies>
  <inbound>
    <base />
    <set-header name="Authorization" exists-action="override">
      <value>@(context.Request.Headers.GetValueOrDefault("Authorization",""))</value>
    </set-header>
    <set-variable name="token" value="@(context.Request.Headers.GetValueOrDefault("x-token","none"))" />
    <set-body>@(context.Request.Body.As<JObject>().ToString())</set-body>
  </inbound>
  <backend>
    <forward-request />
  </backend>
  <outbound>
    <base />
  </outbound>
</policies>"#;

/// [`INTERPOLATED_POLICY`] with different layout
pub const INTERPOLATED_POLICY_REFORMATTED: &str = "<policies>\r\n\t<inbound>\r\n\t\t<base/>\r\n\
\t\t<set-header name=\"Authorization\" exists-action=\"override\">\
<value>@(context.Request.Headers.GetValueOrDefault(\"Authorization\",\"\"))</value></set-header>\r\n\
\t\t<set-variable name=\"token\" value=\"@(context.Request.Headers.GetValueOrDefault(\"x-token\",\"none\"))\"/>\r\n\
\t\t<set-body>@(context.Request.Body.As<JObject>().ToString())</set-body>\r\n\
\t</inbound>\r\n\t<backend><forward-request/></backend>\r\n\t<outbound><base/></outbound>\r\n</policies>";

/// [`INTERPOLATED_POLICY`] as an API returns it, with quotes and brackets
/// escaped. This variant is well-formed XML.
pub const INTERPOLATED_POLICY_ESCAPED: &str = r#"<policies>
	<inbound>
		<base />
		<set-header name="Authorization" exists-action="override">
			<value>@(context.Request.Headers.GetValueOrDefault(&quot;Authorization&quot;,&quot;&quot;))</value>
		</set-header>
		<set-variable name="token" value="@(context.Request.Headers.GetValueOrDefault(&quot;x-token&quot;,&quot;none&quot;))" />
		<set-body>@(context.Request.Body.As&lt;JObject&gt;().ToString())</set-body>
	</inbound>
	<backend>
		<forward-request />
	</backend>
	<outbound>
		<base />
	</outbound>
</policies>"#;

/// [`INTERPOLATED_POLICY`] reading a different header
pub const INTERPOLATED_POLICY_CHANGED: &str = r#"<policies>
  <inbound>
    <base />
    <set-header name="Authorization" exists-action="override">
      <value>@(context.Request.Headers.GetValueOrDefault("Authorization",""))</value>
    </set-header>
    <set-variable name="token" value="@(context.Request.Headers.GetValueOrDefault("x-api-token","none"))" />
    <set-body>@(context.Request.Body.As<JObject>().ToString())</set-body>
  </inbound>
  <backend>
    <forward-request />
  </backend>
  <outbound>
    <base />
  </outbound>
</policies>"#;

/// Re-lay out a document by trimming every line and joining the lines with
/// `separator`.
///
/// Only whitespace between tags changes as long as no text content spans
/// lines, which holds for every fixture in this module.
pub fn relayout(source: &str, separator: &str) -> String {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
