use std::ops::{Deref, DerefMut};

use log::debug;

use crate::net::HttpClient;

/// Sets a client's follow-redirects flag for the lifetime of the guard and
/// restores the previous value when dropped.
///
/// Restoration also happens when a check bails out early with an error or
/// unwinds from a panicking assertion sink.
pub struct FollowGuard<'a, C: HttpClient + ?Sized> {
    client: &'a mut C,
    prior: bool,
}

impl<'a, C: HttpClient + ?Sized> FollowGuard<'a, C> {
    pub fn new(client: &'a mut C, follow: bool) -> Self {
        let prior = client.is_following_redirects();
        if prior != follow {
            client.set_follow_redirects(follow);
        }

        Self { client, prior }
    }

    /// The flag value that is put back on drop.
    pub fn prior(&self) -> bool {
        self.prior
    }
}

impl<C: HttpClient + ?Sized> Deref for FollowGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &*self.client
    }
}

impl<C: HttpClient + ?Sized> DerefMut for FollowGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut *self.client
    }
}

impl<C: HttpClient + ?Sized> Drop for FollowGuard<'_, C> {
    fn drop(&mut self) {
        if self.client.is_following_redirects() != self.prior {
            debug!("Restoring follow redirects to {}", self.prior);
            self.client.set_follow_redirects(self.prior);
        }
    }
}
