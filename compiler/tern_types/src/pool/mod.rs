//! The semantic pool: arena storage for types, declarations, vals and
//! substitution layers.
//!
//! The pool is also the *builder*: every node is created through one of its
//! constructors, which check the node's invariants, compute its
//! [`NodeFlags`] and structural hash once, and (for types always, for vals
//! when [`ValInterning::Canonical`]) return an existing handle for a
//! structurally equal node.
//!
//! # Layout
//!
//! ```text
//! types:  Vec<TypeData>   + flags   (+ dedup map, always)
//! decls:  Vec<Decl>
//! vals:   Vec<ValKind>    + flags + cached hashes (+ dedup buckets)
//! layers: Vec<SubstLayer> + flags + cached hashes
//! ```
//!
//! Nodes are immutable once built. Construction and substitution take
//! `&mut Pool`; a finished pool is `Send + Sync` and may be shared for
//! reading.

mod construct;
mod equality;
mod format;
mod hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::config::{PoolConfig, ValInterning};
use crate::{
    Arg, Decl, DeclId, DeclKind, DeclRef, LayerId, NodeFlags, SubstLayer, SubstSet, TyId,
    TypeData, ValId, ValKind,
};

/// Arena storage and builder for the semantic-value layer.
#[derive(Clone, Debug)]
pub struct Pool {
    // === Types ===
    types: Vec<TypeData>,
    type_flags: Vec<NodeFlags>,
    type_dedup: FxHashMap<TypeData, TyId>,

    // === Declarations ===
    decls: Vec<Decl>,

    // === Vals ===
    vals: Vec<ValKind>,
    val_flags: Vec<NodeFlags>,
    val_hashes: Vec<u64>,
    /// Structural hash to every val with that hash (canonical mode only).
    val_dedup: FxHashMap<u64, SmallVec<[ValId; 1]>>,

    // === Substitution layers ===
    layers: Vec<SubstLayer>,
    layer_flags: Vec<NodeFlags>,
    layer_hashes: Vec<u64>,

    config: PoolConfig,
}

impl Pool {
    /// Create a pool with the default interning mode and limits taken from
    /// the environment (`TERN_SUBST_MAX_DEPTH`).
    pub fn new() -> Self {
        Self::with_config(PoolConfig::from_env())
    }

    /// Create a pool with an explicit configuration.
    pub fn with_config(config: PoolConfig) -> Self {
        let mut pool = Self {
            types: Vec::with_capacity(64),
            type_flags: Vec::with_capacity(64),
            type_dedup: FxHashMap::default(),
            decls: Vec::new(),
            vals: Vec::with_capacity(64),
            val_flags: Vec::with_capacity(64),
            val_hashes: Vec::with_capacity(64),
            val_dedup: FxHashMap::default(),
            layers: Vec::new(),
            layer_flags: Vec::new(),
            layer_hashes: Vec::new(),
            config,
        };

        // Order must match the TyId primitive constants.
        for data in [
            TypeData::Int,
            TypeData::Float,
            TypeData::Bool,
            TypeData::Unit,
            TypeData::Error,
        ] {
            pool.intern_type(data);
        }
        debug_assert_eq!(pool.types.len(), TyId::PRIMITIVE_COUNT as usize);

        pool
    }

    /// The configuration this pool was created with.
    #[inline]
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Check if structurally equal vals share one handle.
    #[inline]
    pub fn interns_vals(&self) -> bool {
        self.config.interning == ValInterning::Canonical
    }

    // === Accessors ===

    /// Get the data of a type.
    #[inline]
    pub fn ty(&self, ty: TyId) -> &TypeData {
        &self.types[ty.index()]
    }

    /// Get the flags of a type.
    #[inline]
    pub fn type_flags(&self, ty: TyId) -> NodeFlags {
        self.type_flags[ty.index()]
    }

    /// Number of distinct types, primitives included.
    #[inline]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Get a declaration.
    #[inline]
    pub fn decl(&self, decl: DeclId) -> &Decl {
        &self.decls[decl.index()]
    }

    /// Get the kind of a val.
    #[inline]
    pub fn val(&self, val: ValId) -> &ValKind {
        &self.vals[val.index()]
    }

    /// Get the flags of a val.
    #[inline]
    pub fn val_flags(&self, val: ValId) -> NodeFlags {
        self.val_flags[val.index()]
    }

    /// Number of val slots allocated so far.
    #[inline]
    pub fn val_count(&self) -> usize {
        self.vals.len()
    }

    /// Get a substitution layer.
    #[inline]
    pub fn layer(&self, layer: LayerId) -> &SubstLayer {
        &self.layers[layer.index()]
    }

    /// Flags of everything a substitution set binds.
    #[inline]
    pub fn set_flags(&self, set: SubstSet) -> NodeFlags {
        set.innermost()
            .map_or(NodeFlags::empty(), |layer| self.layer_flags[layer.index()])
    }

    /// Flags of a decl ref: what the declaration is plus what its context binds.
    pub fn decl_ref_flags(&self, decl_ref: DeclRef) -> NodeFlags {
        let mut flags = self.set_flags(decl_ref.context).propagated();
        match self.decl(decl_ref.decl).kind {
            DeclKind::TypeParam => flags |= NodeFlags::HAS_TYPE_PARAM,
            DeclKind::ValueParam { .. } => flags |= NodeFlags::HAS_VALUE_PARAM,
            DeclKind::Constraint { .. } => flags |= NodeFlags::HAS_CONSTRAINT,
            _ => {}
        }
        if self.enclosing_generic(decl_ref.decl).is_some() {
            flags |= NodeFlags::HAS_GENERIC_DECL_REF;
        }
        flags
    }

    // === Witness Accessors ===

    /// The subtype side of a witness, `None` for IntVals.
    #[inline]
    pub fn witness_sub(&self, val: ValId) -> Option<TyId> {
        self.val(val).subtype_pair().map(|(sub, _)| sub)
    }

    /// The supertype side of a witness, `None` for IntVals.
    #[inline]
    pub fn witness_sup(&self, val: ValId) -> Option<TyId> {
        self.val(val).subtype_pair().map(|(_, sup)| sup)
    }

    // === Generic Structure ===

    /// The innermost generic lexically enclosing `decl`, excluding `decl`
    /// itself.
    pub fn enclosing_generic(&self, decl: DeclId) -> Option<DeclId> {
        let mut current = self.decl(decl).parent;
        while let Some(parent) = current {
            if matches!(self.decl(parent).kind, DeclKind::Generic { .. }) {
                return Some(parent);
            }
            current = self.decl(parent).parent;
        }
        None
    }

    /// Every generic enclosing `decl`, innermost first.
    pub fn enclosing_generics(&self, decl: DeclId) -> SmallVec<[DeclId; 4]> {
        let mut generics = SmallVec::new();
        let mut current = self.enclosing_generic(decl);
        while let Some(generic) = current {
            generics.push(generic);
            current = self.enclosing_generic(generic);
        }
        generics
    }

    /// Parameters of a generic declaration, empty for any other kind.
    pub fn generic_params(&self, generic: DeclId) -> &[DeclId] {
        match &self.decl(generic).kind {
            DeclKind::Generic { params } => params,
            _ => &[],
        }
    }

    /// The innermost layer of `set` binding `generic`.
    pub fn find_layer(&self, set: SubstSet, generic: DeclId) -> Option<LayerId> {
        let mut current = set.innermost();
        while let Some(layer) = current {
            let data = self.layer(layer);
            if data.generic == generic {
                return Some(layer);
            }
            current = data.outer.innermost();
        }
        None
    }

    /// The argument `set` binds to a generic parameter, consulting the
    /// innermost layer first.
    pub fn lookup_param(&self, set: SubstSet, param: DeclId) -> Option<Arg> {
        let generic = self.decl(param).parent?;
        let position = self
            .generic_params(generic)
            .iter()
            .position(|&p| p == param)?;
        let layer = self.find_layer(set, generic)?;
        self.layer(layer).args.get(position).copied()
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
