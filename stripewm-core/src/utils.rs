pub mod child_process;
pub mod helpers;
pub mod ipc_socket;
pub mod modmask_lookup;
