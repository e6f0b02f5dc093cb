//! Tool registry for discovery and dispatch.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::trait_::Tool;

/// Error from registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Tool already registered
    AlreadyRegistered {
        /// Name of the conflicting tool
        name: String,
    },
    /// Tool not found
    NotFound {
        /// Requested name
        name: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyRegistered { name } => write!(f, "Tool already registered: {}", name),
            Self::NotFound { name } => write!(f, "Tool not found: {}", name),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Entry for a registered tool
#[derive(Clone)]
pub struct ToolEntry {
    /// Tool name
    pub name: String,
    /// The tool itself
    pub tool: Arc<dyn Tool>,
}

impl ToolEntry {
    /// Discovery metadata for this entry.
    #[must_use]
    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name.clone(),
            description: self.tool.description().to_string(),
            input_schema: self.tool.input_schema(),
        }
    }
}

/// Discovery metadata published for a tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    /// Tool name
    pub name: String,
    /// One-line description
    pub description: String,
    /// JSON Schema of the argument object
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Registration-ordered collection of tools.
///
/// Built once at startup and shared immutably behind `Arc`; dispatch never
/// mutates it, so concurrent invocations need no locking.
pub struct ToolRegistry {
    tools: IndexMap<String, ToolEntry>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Register a tool under its own name.
    ///
    /// # Errors
    ///
    /// Returns error if a tool with the same name is already registered
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered { name });
        }
        self.tools.insert(name.clone(), ToolEntry { name, tool });
        Ok(())
    }

    /// Get a tool by name
    ///
    /// # Errors
    ///
    /// Returns error if tool not found
    pub fn get(&self, name: &str) -> Result<Arc<dyn Tool>, RegistryError> {
        self.tools
            .get(name)
            .map(|entry| Arc::clone(&entry.tool))
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Descriptors of all registered tools, in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.tools.values().map(ToolEntry::descriptor).collect()
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
