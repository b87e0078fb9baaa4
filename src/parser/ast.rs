//! Best-effort reading of pandoc JSON nodes into the typed model.
//!
//! Every node is an object `{"t": <tag>, "c": <content>}`. A node whose tag
//! is unknown, or whose content does not have the expected shape, becomes an
//! `Unknown` variant instead of failing the whole document.

use crate::model::{Attr, Block, Inline, MetaValue};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Read a JSON array of inline nodes. Non-arrays read as empty.
pub fn read_inlines(value: &Value) -> Vec<Inline> {
    value
        .as_array()
        .map(|items| items.iter().map(read_inline).collect())
        .unwrap_or_default()
}

/// Read a JSON array of block nodes. Non-arrays read as empty.
pub fn read_blocks(value: &Value) -> Vec<Block> {
    value
        .as_array()
        .map(|items| items.iter().map(read_block).collect())
        .unwrap_or_default()
}

/// Read a JSON object of metadata values.
pub fn read_meta(map: &Map<String, Value>) -> BTreeMap<String, MetaValue> {
    map.iter()
        .map(|(key, value)| (key.clone(), read_meta_value(value)))
        .collect()
}

fn tag_of(node: &Value) -> &str {
    node.get("t").and_then(Value::as_str).unwrap_or("")
}

fn content_of(node: &Value) -> &Value {
    node.get("c").unwrap_or(&Value::Null)
}

/// Read one inline node.
pub fn read_inline(node: &Value) -> Inline {
    let tag = tag_of(node);
    let content = content_of(node);

    let inline = match tag {
        "Str" => content.as_str().map(Inline::text),
        "Space" => Some(Inline::Space),
        "Emph" => Some(Inline::Emph(read_inlines(content))),
        "Strong" => Some(Inline::Strong(read_inlines(content))),
        "Subscript" => Some(Inline::Subscript(read_inlines(content))),
        "Superscript" => Some(Inline::Superscript(read_inlines(content))),
        "Strikeout" => Some(Inline::Strikeout(read_inlines(content))),
        "Link" => read_link(content),
        "Code" => read_code(content),
        _ => None,
    };

    inline.unwrap_or_else(|| {
        log::debug!("skipping inline node '{}'", tag);
        Inline::Unknown(tag.to_string())
    })
}

// Link content is `[inlines, target]`, or `[attr, inlines, target]` since
// pandoc 1.16.
fn read_link(content: &Value) -> Option<Inline> {
    let parts = content.as_array()?;
    let (inlines, target) = match parts.as_slice() {
        [inlines, target] => (inlines, target),
        [_, inlines, target] => (inlines, target),
        _ => return None,
    };
    let target = target.as_array()?;
    let url = target.first()?.as_str()?;
    let title = target.get(1).and_then(Value::as_str).unwrap_or("");

    Some(Inline::Link {
        content: read_inlines(inlines),
        url: url.to_string(),
        title: title.to_string(),
    })
}

fn read_code(content: &Value) -> Option<Inline> {
    let code = match content {
        Value::Array(parts) => parts.last()?.as_str()?,
        Value::String(code) => code,
        _ => return None,
    };
    Some(Inline::Code(code.to_string()))
}

/// Read one block node.
pub fn read_block(node: &Value) -> Block {
    let tag = tag_of(node);
    let content = content_of(node);

    let block = match tag {
        "Plain" => Some(Block::Plain(read_inlines(content))),
        "Para" => Some(Block::Para(read_inlines(content))),
        "Header" => read_header(content),
        "BulletList" => read_items(content).map(Block::BulletList),
        "OrderedList" => read_ordered_list(content),
        _ => None,
    };

    block.unwrap_or_else(|| {
        log::debug!("skipping block node '{}'", tag);
        Block::Unknown(tag.to_string())
    })
}

fn read_header(content: &Value) -> Option<Block> {
    let [level, attr, inlines] = content.as_array()?.as_slice() else {
        return None;
    };
    let level = usize::try_from(level.as_u64()?).ok()?;

    Some(Block::Header {
        level,
        attr: read_attr(attr),
        content: read_inlines(inlines),
    })
}

/// Read an `[identifier, [classes], [[key, value]]]` triple.
fn read_attr(value: &Value) -> Attr {
    let Some(parts) = value.as_array() else {
        return Attr::default();
    };

    let identifier = parts
        .first()
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let classes = parts
        .get(1)
        .and_then(Value::as_array)
        .map(|classes| {
            classes
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let attributes = parts
        .get(2)
        .and_then(Value::as_array)
        .map(|pairs| {
            pairs
                .iter()
                .filter_map(|pair| match pair.as_array()?.as_slice() {
                    [key, value] => Some((key.as_str()?.to_string(), value.as_str()?.to_string())),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    Attr {
        identifier,
        classes,
        attributes,
    }
}

fn read_items(content: &Value) -> Option<Vec<Vec<Block>>> {
    Some(content.as_array()?.iter().map(read_blocks).collect())
}

// `[[start, style, delimiter], items]`
fn read_ordered_list(content: &Value) -> Option<Block> {
    let [list_attrs, items] = content.as_array()?.as_slice() else {
        return None;
    };
    let start = list_attrs
        .as_array()
        .and_then(|attrs| attrs.first())
        .and_then(Value::as_i64)
        .unwrap_or(1);

    Some(Block::OrderedList {
        start,
        items: read_items(items)?,
    })
}

/// Read one tagged metadata value.
pub fn read_meta_value(node: &Value) -> MetaValue {
    let tag = tag_of(node);
    let content = content_of(node);

    let value = match tag {
        "MetaInlines" => Some(MetaValue::Inlines(read_inlines(content))),
        "MetaBlocks" => Some(MetaValue::Blocks(read_blocks(content))),
        "MetaList" => content
            .as_array()
            .map(|items| MetaValue::List(items.iter().map(read_meta_value).collect())),
        "MetaMap" => content.as_object().map(|map| MetaValue::Map(read_meta(map))),
        "MetaString" => content.as_str().map(|s| MetaValue::String(s.to_string())),
        "MetaBool" => content.as_bool().map(MetaValue::Bool),
        _ => None,
    };

    value.unwrap_or_else(|| {
        log::debug!("skipping metadata value '{}'", tag);
        MetaValue::Unknown(tag.to_string())
    })
}
