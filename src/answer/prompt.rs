/// Builds the answering prompt around the rendered web context.
pub fn answer_prompt(query: &str, web_context: &str) -> String {
    format!(
        "You are a helpful AI assistant with access to the following web search results for context.\n\n\
         Web Search Context:\n{web_context}\n\n\
         User Question: {query}\n\n\
         Using the web context and your own knowledge, provide a comprehensive, accurate answer \
         in clear paragraphs. Be concise but complete."
    )
}
