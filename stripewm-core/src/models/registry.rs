//! Ordered collection of managed clients.

use serde::{Deserialize, Serialize};

use super::Client;
use super::WindowHandle;

/// Owns every managed client. Iteration order is insertion order with the
/// most recently mapped client first; removal is the only way a client is
/// deallocated.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ClientRegistry {
    clients: Vec<Client>,
}

impl ClientRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly mapped client at the head of the list.
    pub fn insert(&mut self, client: Client) {
        self.clients.insert(0, client);
    }

    pub fn remove(&mut self, handle: WindowHandle) -> Option<Client> {
        let index = self.clients.iter().position(|c| c.window == handle)?;
        Some(self.clients.remove(index))
    }

    #[must_use]
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.clients.iter().any(|c| c.window == handle)
    }

    #[must_use]
    pub fn get(&self, handle: WindowHandle) -> Option<&Client> {
        self.clients.iter().find(|c| c.window == handle)
    }

    pub fn get_mut(&mut self, handle: WindowHandle) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.window == handle)
    }

    /// Look a client up by its frame (decoration) window.
    #[must_use]
    pub fn by_frame(&self, frame: WindowHandle) -> Option<&Client> {
        self.clients.iter().find(|c| c.frame == frame)
    }

    #[must_use]
    pub fn by_frame_mut(&mut self, frame: WindowHandle) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.frame == frame)
    }

    /// Resolve a handle that may name either the client window or its frame.
    #[must_use]
    pub fn resolve(&self, handle: WindowHandle) -> Option<&Client> {
        self.get(handle).or_else(|| self.by_frame(handle))
    }

    pub fn resolve_mut(&mut self, handle: WindowHandle) -> Option<&mut Client> {
        if self.contains(handle) {
            return self.get_mut(handle);
        }
        self.by_frame_mut(handle)
    }

    /// Raw successor in list order, no desktop filtering. This is the
    /// traversal the IPC protocol exposes.
    #[must_use]
    pub fn next_after(&self, handle: WindowHandle) -> Option<&Client> {
        let index = self.clients.iter().position(|c| c.window == handle)?;
        self.clients.get(index + 1)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Client> {
        self.clients.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Client> {
        self.clients.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Client> {
        self.clients.iter_mut()
    }

    /// On-screen non-floating clients of one (monitor, desktop) pair, in
    /// list order. This is the layout engine's input sequence.
    #[must_use]
    pub fn tiled_on(&self, monitor: usize, desktop: usize) -> Vec<&Client> {
        self.clients
            .iter()
            .filter(|c| c.tiled_on(monitor, desktop))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Area;

    fn client(id: u32) -> Client {
        Client::new(WindowHandle(id), WindowHandle(id + 1000), Area::new(0, 0, 100, 100))
    }

    fn registry_with(ids: &[u32]) -> ClientRegistry {
        let mut registry = ClientRegistry::new();
        for &id in ids {
            registry.insert(client(id));
        }
        registry
    }

    #[test]
    fn most_recently_mapped_client_is_first() {
        let registry = registry_with(&[1, 2, 3]);
        let order: Vec<u32> = registry.iter().map(|c| c.window.0).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn next_after_follows_raw_list_order() {
        // Registry order [w3, w2, w1]: the successor of w2 is w1.
        let registry = registry_with(&[1, 2, 3]);
        let next = registry.next_after(WindowHandle(2)).unwrap();
        assert_eq!(next.window, WindowHandle(1));
        assert!(registry.next_after(WindowHandle(1)).is_none());
    }

    #[test]
    fn remove_deallocates_the_client() {
        let mut registry = registry_with(&[1, 2]);
        assert!(registry.remove(WindowHandle(1)).is_some());
        assert!(!registry.contains(WindowHandle(1)));
        assert!(registry.remove(WindowHandle(1)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn resolve_finds_by_either_handle() {
        let registry = registry_with(&[7]);
        assert!(registry.resolve(WindowHandle(7)).is_some());
        assert!(registry.resolve(WindowHandle(1007)).is_some());
        assert!(registry.resolve(WindowHandle(42)).is_none());
    }
}
