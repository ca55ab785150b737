//! Deployment Summary Renderer
//!
//! Renders `RAILWAY_DEPLOYMENT_SUMMARY.md`. Pure string building; writing the
//! file is the infrastructure layer's job.

use crate::domain::value_objects::{SAMPLE_AWB, SUMMARY_ENDPOINTS};

/// File name of the summary document.
pub const SUMMARY_FILE_NAME: &str = "RAILWAY_DEPLOYMENT_SUMMARY.md";

/// Render the summary document.
///
/// `base_url` is repeated throughout; `deeplink` and `pretty_json` are
/// inserted verbatim into fenced blocks.
pub fn render_summary(base_url: &str, deeplink: &str, pretty_json: &str) -> String {
    let endpoints = SUMMARY_ENDPOINTS
        .iter()
        .map(|e| {
            format!(
                "- `{} {}` - {}",
                e.method.as_str(),
                e.url(base_url),
                e.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
# 🚚 CargoDham MCP Server - Railway Deployment Summary

## 🎉 Deployment Complete!

### 🌐 Your API Details:
- **URL**: {base_url}
- **Status**: Live and running globally
- **SSL**: Automatically enabled
- **Monitoring**: Available in Railway dashboard

### 📋 API Endpoints:
{endpoints}

### 🔗 Cursor MCP Integration:

**Deeplink:**
```
{deeplink}
```

**Manual Configuration:**
```json
{pretty_json}
```

### 🧪 Quick Tests:
```bash
# Health check
curl {base_url}/health

# Track order
curl {base_url}/api/track/{SAMPLE_AWB}

# Get wallet balance (requires auth)
curl {base_url}/api/wallet
```

### 🎯 Next Steps:
1. ✅ Your API is live globally
2. ✅ Share the URL with users
3. ✅ Use the Cursor deeplink for MCP integration
4. ✅ Monitor usage in Railway dashboard

### 💡 Benefits You Now Have:
- 🌍 Global access (no local setup needed)
- ⚡ Lightning fast (Railway's edge network)
- 🔒 HTTPS secure by default
- 📊 Built-in monitoring and logs
- 🚀 Auto-scaling based on usage
- 💰 Cost-effective ($5 free credits)

**Congratulations! Your CargoDham MCP Server is now live! 🎉**
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://demo.example.app";

    fn render() -> String {
        render_summary(URL, "cursor://deeplink", "{\n  \"k\": 1\n}")
    }

    #[test]
    fn starts_with_blank_line_and_title() {
        let doc = render();
        assert!(doc.starts_with("\n# 🚚 CargoDham MCP Server - Railway Deployment Summary\n"));
        assert!(doc.ends_with("is now live! 🎉**\n"));
    }

    #[test]
    fn lists_every_endpoint_with_method() {
        let doc = render();
        assert!(doc.contains("- `GET https://demo.example.app/` - API information"));
        assert!(doc.contains("- `GET https://demo.example.app/health` - Health check"));
        assert!(doc.contains("- `POST https://demo.example.app/api/cancel` - Cancel order"));
        assert_eq!(doc.matches("- `POST ").count(), 4);
        assert_eq!(doc.matches("- `GET ").count(), 5);
    }

    #[test]
    fn embeds_deeplink_and_json_in_fences() {
        let doc = render();
        assert!(doc.contains("**Deeplink:**\n```\ncursor://deeplink\n```"));
        assert!(doc.contains("```json\n{\n  \"k\": 1\n}\n```"));
    }

    #[test]
    fn quick_tests_use_sample_awb() {
        let doc = render();
        assert!(doc.contains("curl https://demo.example.app/api/track/20056414613650"));
    }

    #[test]
    fn quick_test_block_snapshot() {
        let doc = render();
        let start = doc.find("### 🧪 Quick Tests:").unwrap();
        let end = doc.find("### 🎯 Next Steps:").unwrap();
        insta::assert_snapshot!(doc[start..end].trim_end(), @r"
        ### 🧪 Quick Tests:
        ```bash
        # Health check
        curl https://demo.example.app/health

        # Track order
        curl https://demo.example.app/api/track/20056414613650

        # Get wallet balance (requires auth)
        curl https://demo.example.app/api/wallet
        ```
        ");
    }
}
