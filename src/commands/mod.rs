//! CLI command handlers. Each renders store output as text; none does I/O.

#[cfg(test)]
mod tests;

use factbook_core::FactStore;

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub store: &'a FactStore,
    /// Language used when a command is given no `--lang`.
    pub default_language: &'a str,
}

impl CommandContext<'_> {
    fn lang<'b>(&'b self, lang: Option<&'b str>) -> &'b str {
        lang.unwrap_or(self.default_language)
    }
}

/// One fact: the one at `index`, or a random one.
pub fn fact(ctx: &CommandContext, lang: Option<&str>, index: Option<i64>) -> anyhow::Result<String> {
    let lang = ctx.lang(lang);
    let text = match index {
        Some(i) => ctx.store.fact(lang, i)?,
        None => ctx.store.random_fact(lang)?,
    };
    Ok(text.to_string())
}

/// Number of facts for a language.
pub fn count(ctx: &CommandContext, lang: Option<&str>) -> anyhow::Result<String> {
    Ok(ctx.store.count(ctx.lang(lang))?.to_string())
}

/// Every fact for a language, numbered from 0, or as a JSON array.
pub fn list(ctx: &CommandContext, lang: Option<&str>, json: bool) -> anyhow::Result<String> {
    let collection = ctx.store.collection(ctx.lang(lang))?;
    if json {
        let facts: Vec<&str> = collection.iter().collect();
        return Ok(serde_json::to_string_pretty(&facts)?);
    }
    let lines: Vec<String> = collection
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{i:>3}. {f}"))
        .collect();
    Ok(lines.join("\n"))
}

/// Registered languages with their fact counts.
pub fn languages(ctx: &CommandContext) -> String {
    ctx.store
        .collections()
        .map(|c| format!("{}: {} facts", c.language(), c.len()))
        .collect::<Vec<_>>()
        .join("\n")
}
