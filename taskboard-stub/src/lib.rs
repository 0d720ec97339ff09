//! In-memory stub of the task board REST API.
//!
//! Implements the four endpoints the client talks to (`GET/POST
//! /projects`, `POST /tasks`, `PATCH /tasks/{id}`) against an in-memory
//! board. Used by the integration tests as an in-process backend and
//! runnable standalone for local development. Keeps no durable state.

pub mod config;
pub mod server;
pub mod state;
