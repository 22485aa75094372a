//! # reconflow - Tool Pipeline Ordering and Command Synthesis
//!
//! **reconflow** takes the tool pipelines users draw on a workflow canvas
//! (nmap, subfinder, dirsearch, ghauri, ...) and turns them into an ordered
//! list of concrete shell commands.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Parse a saved canvas document with `WorkflowDocument`, or
//!     implement `IntoWorkflow` for your own format.
//! 2.  **Plan**: Use `Planner::builder` to create a planner for the `Workflow`. Planning
//!     orders the nodes (cycles never fail, they are appended last) and renders one
//!     command per node from its tool template.
//! 3.  **Dispatch** (optional): Hand the `Plan` to a `Dispatcher`, which sends each
//!     command to an `Executor` strictly in order and collects a `DispatchReport`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reconflow::prelude::*;
//!
//! fn main() {
//!     let mut ids = SequentialIds::new();
//!     let mut workflow = Workflow::new();
//!
//!     let mut recon = ConfigMap::new();
//!     recon.insert("domain".to_string(), ConfigValue::from("example.com"));
//!     let subfinder = workflow.add_node(&mut ids, "Subfinder", recon).id.clone();
//!
//!     let mut scan = ConfigMap::new();
//!     scan.insert("target".to_string(), ConfigValue::from("10.0.0.1"));
//!     let nmap = workflow.add_node(&mut ids, "Nmap", scan).id.clone();
//!
//!     workflow.connect(subfinder, nmap);
//!
//!     let plan = Planner::builder(workflow).build().plan();
//!     for line in plan.listing() {
//!         println!("{}", line);
//!     }
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod order;
pub mod planner;
pub mod prelude;
pub mod tools;
pub mod workflow;
