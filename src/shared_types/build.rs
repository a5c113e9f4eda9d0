use anyhow::Result;
use crux_core::typegen::TypeGen;
use dietcap_ui_core::{
    events::{AuthEvent, UiEvent},
    types::FormField,
    view::{DashboardView, Page},
    App, StorageOperation, StorageOutput,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<AuthEvent>()?;
    gen.register_type::<UiEvent>()?;
    gen.register_type::<FormField>()?;

    // The browser shell answers storage requests itself
    gen.register_type::<StorageOperation>()?;
    gen.register_type::<StorageOutput>()?;

    gen.register_type::<Page>()?;
    gen.register_type::<DashboardView>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
