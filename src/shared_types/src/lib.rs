//! Generated TypeScript bindings for the browser shell are written to
//! `generated/typescript` by the build script.
