// Cross-cutting prompt fragments shared by every advisor prompt.
// Section-specific templates live in recommendation::prompts.

/// Appended to every prompt. The response schema constrains shape; this constrains content.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with valid JSON only, matching the requested schema exactly. \
    Do NOT wrap the JSON in markdown code fences. \
    Do NOT include explanations outside the JSON object.";

/// Keeps suggestions realistic for a student audience.
pub const REALISM_INSTRUCTION: &str = "\
    Base every suggestion on the profile provided. \
    Prefer realistic, currently available options over aspirational ones, \
    and keep salary and cost figures as ranges in US dollars.";
