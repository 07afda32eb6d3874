//! Human-readable rendering of types, vals and decl refs for diagnostics.

#![allow(clippy::format_push_string)] // Debug formatting prioritizes clarity over allocation

use tern_ir::StringInterner;
use tern_stack::ensure_sufficient_stack;

use crate::{Arg, DeclId, DeclRef, Pool, SubstSet, TyId, TypeData, ValId, ValKind};

impl Pool {
    /// Format a type as a human-readable string.
    pub fn format_type(&self, ty: TyId, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.format_type_into(ty, interner, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, ty: TyId, interner: &StringInterner, buf: &mut String) {
        ensure_sufficient_stack(|| self.push_type(ty, interner, buf));
    }

    fn push_type(&self, ty: TyId, interner: &StringInterner, buf: &mut String) {
        match self.ty(ty) {
            TypeData::Int => buf.push_str("int"),
            TypeData::Float => buf.push_str("float"),
            TypeData::Bool => buf.push_str("bool"),
            TypeData::Unit => buf.push_str("()"),
            TypeData::Error => buf.push_str("<error>"),
            TypeData::Param(decl) => self.push_decl_name(*decl, interner, buf),
            TypeData::Named { decl, args } => {
                self.push_decl_name(*decl, interner, buf);
                if !args.is_empty() {
                    buf.push('<');
                    self.format_list(args, buf, |pool, &arg, buf| {
                        pool.format_type_into(arg, interner, buf);
                    });
                    buf.push('>');
                }
            }
            TypeData::TaggedUnion(cases) => {
                for (i, &case) in cases.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(" | ");
                    }
                    self.format_type_into(case, interner, buf);
                }
            }
            TypeData::Opened(binding) => {
                buf.push_str("open(");
                self.push_decl_name(*binding, interner, buf);
                buf.push(')');
            }
        }
    }

    /// Format a val as a human-readable string.
    pub fn format_val(&self, val: ValId, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.format_val_into(val, interner, &mut buf);
        buf
    }

    /// Format a val into an existing string buffer.
    ///
    /// Transitive witnesses nest one level per link, so deep chains grow the
    /// stack instead of overflowing it.
    pub fn format_val_into(&self, val: ValId, interner: &StringInterner, buf: &mut String) {
        ensure_sufficient_stack(|| self.push_val(val, interner, buf));
    }

    fn push_val(&self, val: ValId, interner: &StringInterner, buf: &mut String) {
        match self.val(val) {
            ValKind::ConstantInt { value } => buf.push_str(&value.to_string()),
            ValKind::GenericParamInt { decl_ref } => {
                self.push_decl_name(decl_ref.decl, interner, buf);
            }
            ValKind::ErrorInt => buf.push_str("<error>"),
            ValKind::TypeEquality { sub, .. } => {
                buf.push_str("TypeEqualityWitness(");
                self.format_type_into(*sub, interner, buf);
                buf.push(')');
            }
            ValKind::DeclaredSubtype { sub, sup, decl_ref } => {
                buf.push_str("DeclaredSubtypeWitness(");
                self.format_witness_header(*sub, *sup, interner, buf);
                buf.push_str(", ");
                self.format_decl_ref_into(*decl_ref, interner, buf);
                buf.push(')');
            }
            ValKind::TransitiveSubtype {
                sub_to_mid,
                mid_to_sup,
                ..
            } => {
                buf.push_str("TransitiveSubtypeWitness(");
                self.format_val_into(*sub_to_mid, interner, buf);
                buf.push_str(", ");
                self.format_decl_ref_into(*mid_to_sup, interner, buf);
                buf.push(')');
            }
            ValKind::ExtractExistentialSubtype { sub, sup, decl_ref } => {
                buf.push_str("ExtractExistentialSubtypeWitness(");
                self.format_witness_header(*sub, *sup, interner, buf);
                buf.push_str(", ");
                self.format_decl_ref_into(*decl_ref, interner, buf);
                buf.push(')');
            }
            ValKind::TaggedUnionSubtype {
                sub,
                sup,
                case_witnesses,
            } => {
                buf.push_str("TaggedUnionSubtypeWitness(");
                self.format_witness_header(*sub, *sup, interner, buf);
                buf.push_str(", [");
                self.format_list(case_witnesses, buf, |pool, &w, buf| {
                    pool.format_val_into(w, interner, buf);
                });
                buf.push_str("])");
            }
        }
    }

    /// Format a decl ref: the declaration name followed by the arguments of
    /// its context, outermost layer first.
    pub fn format_decl_ref(&self, decl_ref: DeclRef, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.format_decl_ref_into(decl_ref, interner, &mut buf);
        buf
    }

    fn format_decl_ref_into(&self, decl_ref: DeclRef, interner: &StringInterner, buf: &mut String) {
        self.push_decl_name(decl_ref.decl, interner, buf);
        let args = self.context_args(decl_ref.context);
        if !args.is_empty() {
            buf.push('<');
            self.format_list(&args, buf, |pool, &arg, buf| match arg {
                Arg::Type(ty) => pool.format_type_into(ty, interner, buf),
                Arg::Val(val) => pool.format_val_into(val, interner, buf),
            });
            buf.push('>');
        }
    }

    fn format_witness_header(
        &self,
        sub: TyId,
        sup: TyId,
        interner: &StringInterner,
        buf: &mut String,
    ) {
        self.format_type_into(sub, interner, buf);
        buf.push_str(", ");
        self.format_type_into(sup, interner, buf);
    }

    /// Arguments of every layer of `set`, outermost layer first.
    fn context_args(&self, set: SubstSet) -> Vec<Arg> {
        let mut layers = Vec::new();
        let mut current = set.innermost();
        while let Some(layer) = current {
            layers.push(layer);
            current = self.layer(layer).outer.innermost();
        }
        layers
            .into_iter()
            .rev()
            .flat_map(|layer| self.layer(layer).args.iter().copied())
            .collect()
    }

    fn push_decl_name(&self, decl: DeclId, interner: &StringInterner, buf: &mut String) {
        buf.push_str(interner.lookup(self.decl(decl).name));
    }

    fn format_list<T>(
        &self,
        items: &[T],
        buf: &mut String,
        mut each: impl FnMut(&Self, &T, &mut String),
    ) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            each(self, item, buf);
        }
    }
}

#[cfg(test)]
mod tests;
