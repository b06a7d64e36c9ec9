//! Member copiers and trait appliers
//!
//! The copy mechanism is one procedure applied twice: enumerate the source
//! table in definition order, skip reserved and ignored names, install every
//! method or accessor descriptor onto the destination table under the same
//! name (overwriting non-reserved members), and fail on the first plain data
//! member. [`copy_statics`] runs it over the static tables, [`copy_template`]
//! over the instance-template tables, and [`apply_trait`] composes the two.
//!
//! A failure does not roll back members that were already copied.

use log::{debug, trace};

use mixweave_model::{ClassDef, MemberTable};

use crate::error::{TraitError, TraitResult};
use crate::ignore::{IgnoreList, RESERVED_STATIC_NAMES, RESERVED_TEMPLATE_NAMES};

/// Copy static members from `source` onto `dest`.
///
/// Only ignore entries carrying the `static::` prefix are honored here;
/// plain entries are left for the template phase.
pub fn copy_statics<S: AsRef<str>>(
    source: &ClassDef,
    dest: &mut ClassDef,
    ignore: &[S],
) -> TraitResult<()> {
    copy_static_phase(source, dest, &IgnoreList::parse(ignore))
}

/// Copy instance-template members from `source` onto `dest`.
///
/// Only ignore entries without the `static::` prefix are honored here.
pub fn copy_template<S: AsRef<str>>(
    source: &ClassDef,
    dest: &mut ClassDef,
    ignore: &[S],
) -> TraitResult<()> {
    copy_template_phase(source, dest, &IgnoreList::parse(ignore))
}

/// Apply a trait to a destination class: copy its static members, then its
/// instance-template members.
///
/// The source acts as a trait and must not require constructor arguments;
/// it is never instantiated, and its constructor is never copied.
pub fn apply_trait<S: AsRef<str>>(
    source: &ClassDef,
    dest: &mut ClassDef,
    ignore: &[S],
) -> TraitResult<()> {
    let ignore = IgnoreList::parse(ignore);
    debug!("applying trait `{}` to `{}`", source.name(), dest.name());
    copy_static_phase(source, dest, &ignore)?;
    copy_template_phase(source, dest, &ignore)
}

/// Deferred form of [`apply_trait`]: capture the trait and ignore list now,
/// apply to a destination later. Semantically identical to the direct call.
pub fn trait_applier<'a, S: AsRef<str>>(
    source: &'a ClassDef,
    ignore: &[S],
) -> impl Fn(&mut ClassDef) -> TraitResult<()> + 'a {
    let ignore = IgnoreList::parse(ignore);
    move |dest| {
        debug!("applying trait `{}` to `{}`", source.name(), dest.name());
        copy_static_phase(source, dest, &ignore)?;
        copy_template_phase(source, dest, &ignore)
    }
}

/// Apply a sequence of traits to a destination class, in order and with no
/// ignore list. Later traits overwrite same-named members installed by
/// earlier ones; reserved names are never touched. Stops at the first
/// failing trait.
pub fn apply_traits(dest: &mut ClassDef, traits: &[&ClassDef]) -> TraitResult<()> {
    for source in traits {
        apply_trait::<&str>(source, dest, &[])?;
    }
    Ok(())
}

fn copy_static_phase(
    source: &ClassDef,
    dest: &mut ClassDef,
    ignore: &IgnoreList,
) -> TraitResult<()> {
    let trait_name = source.name();
    copy_members(
        trait_name,
        source.statics(),
        dest.statics_mut(),
        RESERVED_STATIC_NAMES,
        |name| ignore.skips_static(name),
        |member| TraitError::DisallowedStaticDataMember {
            trait_name: trait_name.to_string(),
            member: member.to_string(),
        },
    )
}

fn copy_template_phase(
    source: &ClassDef,
    dest: &mut ClassDef,
    ignore: &IgnoreList,
) -> TraitResult<()> {
    let trait_name = source.name();
    copy_members(
        trait_name,
        source.template(),
        dest.template_mut(),
        RESERVED_TEMPLATE_NAMES,
        |name| ignore.skips_template(name),
        |member| TraitError::DisallowedInstanceDataMember {
            trait_name: trait_name.to_string(),
            member: member.to_string(),
        },
    )
}

// The single copy mechanism both phases share. Enumeration order is the
// source table's definition order; a data member aborts the walk, leaving
// earlier copies in place.
fn copy_members<R>(
    trait_name: &str,
    src: &MemberTable<R>,
    dst: &mut MemberTable<R>,
    reserved: &[&str],
    skip: impl Fn(&str) -> bool,
    on_data: impl Fn(&str) -> TraitError,
) -> TraitResult<()> {
    for (name, member) in src.iter() {
        if reserved.contains(&name) || skip(name) {
            continue;
        }
        if member.is_data() {
            return Err(on_data(name));
        }
        trace!("trait `{}`: copying member `{}`", trait_name, name);
        dst.define(name, member.clone());
    }
    Ok(())
}
