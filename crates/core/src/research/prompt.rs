use super::types::{Operation, ResearchError, ResearchRequest};

/// Instruction sent ahead of the passage for [`Operation::Summarize`].
pub const SUMMARIZE_TEMPLATE: &str = concat!(
    "You are my Research Assistant, my teacher , professor , philosopher, scientist, researcher, everything .\n",
    "Your purpose is to make studying easier.\n",
    "I will paste a passage of text. Rewrite it into two sections:\n",
    "\n",
    "1. Easy Explanation\n",
    "- Explain the full passage in simple, clear language.\n",
    "- Cover all main ideas so even a beginner can understand.\n",
    "- Keep it short, about 1–3 paragraphs.\n",
    "\n",
    "2. Detailed Explanation\n",
    "- Give a deeper, structured explanation in short paragraphs.\n",
    "- Use \"-\" dashes for lists of applications, insights, or related concepts.\n",
    "- End with 2–3 reference links.\n",
    "\n",
    "Rules:\n",
    "- Plain text only. No markdown, no HTML, no symbols like ** or ##.\n",
    "- Put a blank line before each section heading.\n",
    "- No introductions or filler like \"Here is your answer\".\n",
    "- Be concise but complete.\n",
    "\n",
    "\n ",
    "\n",
    "\n:\n\n",
);

/// Instruction sent ahead of the passage for [`Operation::Suggest`].
pub const SUGGEST_TEMPLATE: &str = "Based on the following content: suggest related topic and further reading. Format the response with clear heading and bullet points:\n\n";

/// Fixed instruction text for an operation.
pub fn template_for(operation: Operation) -> &'static str {
    match operation {
        Operation::Summarize => SUMMARIZE_TEMPLATE,
        Operation::Suggest => SUGGEST_TEMPLATE,
    }
}

/// Build the model prompt for a research request.
///
/// The result is the operation's template immediately followed by the
/// request content, unmodified. Fails with
/// [`ResearchError::UnsupportedOperation`] when the operation is unknown.
pub fn build_prompt(request: &ResearchRequest) -> Result<String, ResearchError> {
    let operation: Operation = request.operation.parse()?;
    let template = template_for(operation);

    let mut prompt = String::with_capacity(template.len() + request.content.len());
    prompt.push_str(template);
    prompt.push_str(&request.content);

    Ok(prompt)
}
