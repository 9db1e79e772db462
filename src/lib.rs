//! Sistema de seguimiento de mantenimiento de flotas industriales
//!
//! Lleva el horómetro de cada vehículo, computa la vida útil restante
//! contra el intervalo de service y dispara alertas por umbral o por
//! parada técnica, con un historial de eventos append-only por
//! vehículo.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
