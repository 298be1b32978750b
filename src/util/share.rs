//! Share/export sink for the formatted summaries.
//!
//! Prefers the native share capability when the webview exposes one, then
//! falls back to the clipboard. Total failure surfaces a blocking notice
//! from inside the page; nothing is retried.

use dioxus::document;
use dioxus::prelude::*;

/// Hand a summary string to the share sink. Returns `false` only when the
/// text is empty; delivery itself is fire-and-forget.
pub fn share_or_copy(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let script = format!(
        r#"(async () => {{
            const data = {payload};
            if (navigator.share) {{
                try {{
                    await navigator.share({{ text: data }});
                    return true;
                }} catch (_err) {{
                    // user dismissed the share sheet
                    return false;
                }}
            }}
            try {{
                if (navigator.clipboard && navigator.clipboard.writeText) {{
                    await navigator.clipboard.writeText(data);
                    return true;
                }}
            }} catch (_err) {{
                // fall through to the textarea shim
            }}
            try {{
                const textarea = document.createElement('textarea');
                textarea.value = data;
                textarea.style.position = 'fixed';
                textarea.style.opacity = '0';
                document.body.appendChild(textarea);
                textarea.focus();
                textarea.select();
                const ok = document.execCommand('copy');
                document.body.removeChild(textarea);
                if (ok) return true;
            }} catch (_err) {{
                // nothing left to try
            }}
            alert('Failed to copy the summary to the clipboard.');
            return false;
        }})()"#
    );
    let eval = document::eval(&script);
    spawn(async move {
        if let Err(err) = eval.await {
            println!("Share sink eval failed: {err:?}");
        }
    });
    true
}
