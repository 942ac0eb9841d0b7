// AIPilotSmarteasy Landing Page — Leptos 0.8 Edition
// Built by the AIPilot team (c)2023

fn main() {
    aipilot_landing::start();
}
