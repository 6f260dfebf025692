//! Data model for a single parsed DocBlock.

/// One documented entity, accumulated between block markers and handed to the
/// renderer exactly once, after the declaration line following the block.
#[derive(Debug, Default)]
pub struct DocBlock {
    /// First non-blank, non-property content line of the block.
    pub summary: String,
    /// All later plain content lines; joined with single spaces on render.
    pub description: Vec<String>,
    /// `@param` entries in order of first appearance.
    pub params: Vec<Param>,
    /// Generic `@name value` properties, insertion-ordered. The name
    /// `return` is reserved and rendered separately.
    pub properties: Vec<(String, String)>,
}

/// A single `@param` entry.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Param {
    pub type_name: String,
    pub name: String,
    pub description: String,
}

impl DocBlock {
    /// Insert a parameter, or overwrite an existing one that shares its
    /// `{type, name}` key. Returns the entry's index so continuation lines
    /// can target it.
    pub fn upsert_param(&mut self, param: Param) -> usize {
        if let Some(idx) = self
            .params
            .iter()
            .position(|p| p.type_name == param.type_name && p.name == param.name)
        {
            self.params[idx] = param;
            idx
        } else {
            self.params.push(param);
            self.params.len() - 1
        }
    }

    /// Insert a property, or overwrite an existing one of the same name,
    /// keeping the position of first appearance. Returns the entry's index.
    pub fn upsert_property(&mut self, name: &str, value: &str) -> usize {
        if let Some(idx) = self.properties.iter().position(|(n, _)| n == name) {
            self.properties[idx].1 = value.to_string();
            idx
        } else {
            self.properties.push((name.to_string(), value.to_string()));
            self.properties.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(type_name: &str, name: &str, description: &str) -> Param {
        Param {
            type_name: type_name.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn param_duplicate_key_overwrites_in_place() {
        let mut block = DocBlock::default();
        block.upsert_param(param("int", "$1", "first"));
        block.upsert_param(param("int", "$2", "second"));
        let idx = block.upsert_param(param("int", "$1", "replaced"));
        assert_eq!(idx, 0);
        assert_eq!(block.params.len(), 2);
        assert_eq!(block.params[0].description, "replaced");
    }

    #[test]
    fn param_same_name_different_type_is_a_new_entry() {
        let mut block = DocBlock::default();
        block.upsert_param(param("int", "$1", "a"));
        block.upsert_param(param("string", "$1", "b"));
        assert_eq!(block.params.len(), 2);
    }

    #[test]
    fn property_duplicate_name_overwrites_in_place() {
        let mut block = DocBlock::default();
        block.upsert_property("author", "Jane");
        block.upsert_property("since", "0.1");
        let idx = block.upsert_property("author", "Joan");
        assert_eq!(idx, 0);
        assert_eq!(block.properties.len(), 2);
        assert_eq!(
            block.properties[0],
            ("author".to_string(), "Joan".to_string())
        );
    }
}
