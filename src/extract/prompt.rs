pub const SYSTEM_PROMPT: &str = "You are a helpful assistant specialized in language learning and vocabulary extraction. Always respond with valid JSON.";

/// User prompt asking for `{original, translation}` pairs from one subtitle line
pub fn build_extraction_prompt(line: &str, source_language: &str) -> String {
    format!(
        "You are an expert in language teaching.\n\
         \n\
         Extract language learning vocabulary from the following subtitle snippet in {} language.\n\
         \n\
         Guidelines:\n\
         - Extract meaningful words and phrases that would be useful for language learners\n\
         - Ignore music indicators like [موسيقى] or [music]\n\
         - Extract even single words if they are meaningful vocabulary\n\
         - Ignore proper nouns (names, places, brands), exclamations (oh, wow), and non-translatable words\n\
         - For each extracted word/phrase, provide an English translation suitable for learning\n\
         - Retain correct capitalization and spelling\n\
         - Focus on common, everyday vocabulary that learners would encounter\n\
         - Even if snippets are short, extract any meaningful vocabulary\n\
         - Avoid!! comma-separated synonyms. Simply give the most fitting translation!\n\
         - Only add the pure words/expressions themselves. Do not add notes or extra infos.\n\
         \n\
         Return your answer as a JSON array with objects containing 'original' and 'translation' fields.\n\
         \n\
         Subtitle snippet to analyze:\n\
         {}\n",
        source_language, line
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_line_and_language() {
        let prompt = build_extraction_prompt("¿Dónde está la biblioteca?", "es");
        assert!(prompt.contains("subtitle snippet in es language"));
        assert!(prompt.ends_with("Subtitle snippet to analyze:\n¿Dónde está la biblioteca?\n"));
    }
}
