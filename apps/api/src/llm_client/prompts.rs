// Prompts for entity recognition over the head of a résumé.

pub const NER_SYSTEM: &str = "You are a named-entity recognizer. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// `{window}` is replaced with the leading text of the document.
pub const NER_PROMPT_TEMPLATE: &str = r#"Find the named entities in the text below.

Return a JSON object of the form:
{"entities": [{"text": "<exact span as it appears>", "label": "<PERSON|ORG|GPE|DATE|OTHER>"}]}

Rules:
- List entities in the order they appear in the text.
- Copy each span exactly; do not normalise casing or spelling.
- Use the label PERSON only for names of people.
- Return {"entities": []} if there are none.

Text:
"""
{window}
""""#;
