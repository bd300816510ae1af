//! Interactive-component tree mapping.

use crate::{ButtonStyle, RenderableComponent, RenderableEmoji};
use scribe_core::ComponentNode;
use scribe_format::RichTextFormatter;

// Component trees arrive freshly deserialized per message, so they cannot
// cycle; the cap bounds recursion anyway so no input shape can overflow
// the stack. Nodes past the cap degrade to Unknown.
const MAX_COMPONENT_DEPTH: usize = 32;

// Wire discriminators for the recognized component kinds.
const KIND_ACTION_ROW: u8 = 1;
const KIND_BUTTON: u8 = 2;
const KIND_TEXT_BLOCK: u8 = 10;
const KIND_SEPARATOR: u8 = 14;
const KIND_CONTAINER: u8 = 17;

/// Map a message's component tree roots into renderable components.
///
/// Dispatch is by the integer discriminator; unrecognized kinds map to
/// `RenderableComponent::Unknown` so newer component types degrade
/// gracefully. Children are mapped before their parent is finalized and
/// sibling order is preserved throughout.
pub fn map_components(
    nodes: &[ComponentNode],
    formatter: &RichTextFormatter,
) -> Vec<RenderableComponent> {
    nodes
        .iter()
        .map(|node| map_node(node, formatter, 0))
        .collect()
}

fn map_node(
    node: &ComponentNode,
    formatter: &RichTextFormatter,
    depth: usize,
) -> RenderableComponent {
    let id = *node.id();
    if depth >= MAX_COMPONENT_DEPTH {
        return RenderableComponent::Unknown {
            id,
            raw_kind: *node.kind(),
        };
    }

    match *node.kind() {
        KIND_ACTION_ROW => RenderableComponent::ActionRow {
            id,
            children: map_children(node, formatter, depth),
        },
        KIND_BUTTON => RenderableComponent::Button {
            id,
            style: ButtonStyle::from(node.style().unwrap_or(2)),
            label: node.label().clone(),
            custom_id: node.custom_id().clone(),
            disabled: *node.disabled(),
            emoji: node.emoji().as_ref().map(|emoji| RenderableEmoji {
                id: *emoji.id(),
                name: emoji.name().clone(),
                animated: *emoji.animated(),
            }),
            url: node.url().clone(),
        },
        KIND_TEXT_BLOCK => RenderableComponent::TextBlock {
            id,
            content: formatter.format(node.content().as_deref().unwrap_or_default()),
        },
        KIND_SEPARATOR => RenderableComponent::Separator {
            id,
            spacing: node.spacing().unwrap_or(1),
            divider: node.divider().unwrap_or(true),
        },
        KIND_CONTAINER => RenderableComponent::Container {
            id,
            accent_color: node.accent_color().map(|color| format!("#{color:06x}")),
            spoiler: *node.spoiler(),
            children: map_children(node, formatter, depth),
        },
        raw_kind => RenderableComponent::Unknown { id, raw_kind },
    }
}

fn map_children(
    node: &ComponentNode,
    formatter: &RichTextFormatter,
    depth: usize,
) -> Vec<RenderableComponent> {
    node.components()
        .iter()
        .map(|child| map_node(child, formatter, depth + 1))
        .collect()
}
