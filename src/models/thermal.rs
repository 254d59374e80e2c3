//! Thermal systems models.
//!
//! This module contains models for extended surfaces (fins) that enhance
//! convective heat transfer from a base surface.

pub mod fin;
