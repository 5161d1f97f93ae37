use crate::types::VisualizationData;

/// Separator between a layer's group prefix and the rest of its name.
pub const LAYER_DELIMITER: char = '.';

/// A group of layers sharing the prefix before the first delimiter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerGroup<'a> {
    pub prefix: &'a str,
    pub layers: Vec<&'a str>,
}

/// Layer names split into top-level entries and prefix groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerPartition<'a> {
    pub top_level: Vec<&'a str>,
    pub grouped: Vec<LayerGroup<'a>>,
}

impl<'a> LayerPartition<'a> {
    pub fn group(&self, prefix: &str) -> Option<&LayerGroup<'a>> {
        self.grouped.iter().find(|g| g.prefix == prefix)
    }
}

/// Split layer names by hierarchy.
///
/// Names without a delimiter are top-level. The rest are bucketed by the
/// prefix before the first delimiter. Both lists follow the order of the
/// input, and groups appear in order of their first member.
pub fn partition_layers(viz: &VisualizationData) -> LayerPartition<'_> {
    let mut partition = LayerPartition::default();
    for name in viz.names() {
        match name.split_once(LAYER_DELIMITER) {
            None => partition.top_level.push(name),
            Some((prefix, _)) => {
                match partition.grouped.iter_mut().find(|g| g.prefix == prefix) {
                    Some(group) => group.layers.push(name),
                    None => partition.grouped.push(LayerGroup {
                        prefix,
                        layers: vec![name],
                    }),
                }
            }
        }
    }
    partition
}
