// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed catalog of damage types.

use roadwatch_core::DamageTypeDefinition;

/// Read-only list of damage categories, returned in insertion order.
#[derive(Debug, Clone)]
pub struct DamageTypeCatalog {
    types: Vec<DamageTypeDefinition>,
}

impl DamageTypeCatalog {
    pub fn new(types: Vec<DamageTypeDefinition>) -> Self {
        Self { types }
    }

    /// Every definition, in insertion order.
    pub fn list_all(&self) -> &[DamageTypeDefinition] {
        &self.types
    }

    /// Look up a definition by id.
    pub fn get(&self, type_id: u32) -> Option<&DamageTypeDefinition> {
        self.types.iter().find(|t| t.type_id == type_id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for DamageTypeCatalog {
    /// The five built-in categories.
    fn default() -> Self {
        Self::new(vec![
            definition(1, "Schlagloch", "Schlaglöcher und Fahrbahnschäden", "pothole", 1, 10),
            definition(2, "Beschädigtes Schild", "Verkehrsschilder beschädigt", "sign", 2, 20),
            definition(3, "Defekte Beleuchtung", "Straßenbeleuchtung defekt", "light", 2, 30),
            definition(4, "Kanalisationsschaden", "Schäden an Kanalisation", "drain", 1, 40),
            definition(5, "Vegetationsproblem", "Bäume/Sträucher behindern Verkehr", "tree", 3, 50),
        ])
    }
}

fn definition(
    type_id: u32,
    label: &str,
    description: &str,
    icon_name: &str,
    priority: u8,
    sort_order: u32,
) -> DamageTypeDefinition {
    DamageTypeDefinition {
        type_id,
        label: label.to_string(),
        description: description.to_string(),
        icon_name: icon_name.to_string(),
        priority,
        sort_order,
    }
}
