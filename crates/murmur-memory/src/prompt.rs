//! Prompt templates and response extraction for memory summarization.
//!
//! The templates are configuration data, not logic. The structured template
//! keeps its Chinese field names for backward compatibility with memory
//! documents already on disk; all field values are generated in English.

use crate::model::{DialogueTurn, TurnRole};

/// System prompt for structured mode: the model returns a JSON memory graph.
pub const STRUCTURED_MEMORY_PROMPT: &str = r#"# Temporal Memory Weaver

## Core Mission
Maintain an evolving compact memory graph. Preserve only user-relevant, actionable, identity / preference / long-term contextual information from the dialogue while tracking changes over time.

## Memory Principles
### 1. Three-Dimension Scoring (apply every update)
| Dimension        | Criterion (Guideline)                     | Weight |
|------------------|-------------------------------------------|--------|
| Recency          | Freshness (recent dialogue turns)         | 40%    |
| Emotional Intensity | Strong affect / repeated emphasis (💖) | 35%    |
| Connectivity     | Links to other retained facts             | 25%    |

### 2. Dynamic Update Examples
Name change handling example:
Original: "曾用名": ["张三"], "现用名": "张三丰"
When detecting patterns like "My name is X" / "Call me Y":
1. Move old name into list "曾用名" (former names)
2. Append a timeline marker: "2024-02-15 14:32: 启用张三丰"
3. Add an evolution note into memory cube describing the identity shift.

### 3. Space Optimization
- Compression: Use compact symbolic annotations (e.g. ✅ "Alex[NY/Backend/🐱]" ❌ "Alex lives in New York, is a backend engineer and owns a cat")
- Pruning Trigger: If total characters ≥ 900:
    1. Remove entries with weighted score < 60 and not referenced in last 3 turns.
    2. Merge near-duplicate items (keep the most recent timestamp).

## Output Structure
Return ONLY a valid JSON string (no explanations, no markdown code fences unless strictly needed). Extract info ONLY from the conversation; do NOT include fictitious examples. Keep field names EXACTLY as shown (Chinese keys retained for backward compatibility) but generate all textual content (values) in English.
```json
{
    "时空档案": {
        "身份图谱": {
            "现用名": "",
            "特征标记": []
        },
        "记忆立方": [
            {
                "事件": "Joined a new company",
                "时间戳": "2024-03-20",
                "情感值": 0.9,
                "关联项": ["afternoon tea"],
                "保鲜期": 30
            }
        ]
    },
    "关系网络": {
        "高频话题": {"career": 12},
        "暗线联系": [""]
    },
    "待响应": {
        "紧急事项": ["Immediate tasks"],
        "潜在关怀": ["Potential proactive support"]
    },
    "高光语录": [
        "A directly quoted emotionally strong user moment"
    ]
}
```

### Additional Constraints
1. Use English for all content values.
2. Do NOT fabricate facts; only include what is grounded in dialogue.
3. Keep emotional / preference / identity / plans / concerns; ignore device control, weather, trivial filler, or ephemeral system status.
4. If no meaningful new information appears, you may return the previous memory unchanged.
5. Total JSON (string length) should remain concise (target < 1800 Chinese characters equivalent; optimize but do not lose key facts).
"#;

/// System prompt for content-only mode: the model returns plain English text.
pub const CONTENT_MEMORY_PROMPT: &str = r#"You are an experienced dialogue memory summarizer. Produce an updated SHORT memory (English only) following these rules:
1. Extract only stable user-centric facts: identity, preferences, routines, goals, concerns, emotional signals.
2. Do NOT repeat or discard prior memory unless the accumulated memory would exceed about 1800 characters; preserve earlier facts unless clearly obsolete.
3. Exclude: device volume changes, media playback commands, weather reports, exit/stop phrases, refusal to chat, transient control interactions.
4. Exclude ephemeral data like today's timestamp or current weather unless the user ties them to a personal plan or event.
5. Exclude execution success/failure of device actions and meaningless filler phrases.
6. If the latest conversation adds nothing meaningful, simply return the previous historical memory unchanged.
7. Output ONLY the updated memory text (no JSON required in this mode), within ~1800 characters.
8. No code, XML, or commentary—pure factual English summary.
"#;

/// Render the transcript, prior memory, and timestamp into user content.
///
/// Turns appear as `User:` / `Assistant:` lines in input order; other roles
/// are skipped. A non-empty prior memory is appended verbatim under a
/// `History Memory:` label, and the current time line always comes last.
pub(crate) fn build_user_prompt(
    turns: &[DialogueTurn],
    prior_memory: &str,
    timestamp: &str,
) -> String {
    let mut prompt = String::new();
    for turn in turns {
        let label = match turn.role {
            TurnRole::User => "User: ",
            TurnRole::Assistant => "Assistant: ",
            TurnRole::System => continue,
        };
        prompt.push_str(label);
        prompt.push_str(&turn.content);
        prompt.push('\n');
    }
    if !prior_memory.is_empty() {
        prompt.push_str("History Memory:\n");
        prompt.push_str(prior_memory);
        prompt.push('\n');
    }
    prompt.push_str("Current Time: ");
    prompt.push_str(timestamp);
    prompt
}

/// Extract the JSON payload from a model response.
///
/// Canonical two-step algorithm: take the interior of a ```json fenced block
/// when a complete one is present, otherwise accept the raw response only if
/// it parses as JSON on its own.
pub fn extract_json_payload(response: &str) -> Option<String> {
    const FENCE_OPEN: &str = "```json";
    const FENCE_CLOSE: &str = "```";

    if let Some(start) = response.find(FENCE_OPEN) {
        let body = &response[start + FENCE_OPEN.len()..];
        if let Some(end) = body.find(FENCE_CLOSE) {
            return Some(body[..end].trim().to_string());
        }
    }
    if serde_json::from_str::<serde_json::Value>(response).is_ok() {
        return Some(response.to_string());
    }
    None
}
