macro_rules! droppable {
    () => {
        #[derive(Debug, Eq, Ord, PartialEq, PartialOrd)]
        struct Droppable(i32);

        impl Droppable {
            fn new() -> Self {
                let n = COUNT.fetch_add(1, core::sync::atomic::Ordering::Relaxed);
                Droppable(n + 1)
            }
        }

        impl Clone for Droppable {
            fn clone(&self) -> Self {
                COUNT.fetch_add(1, core::sync::atomic::Ordering::Relaxed);
                Droppable(self.0)
            }
        }

        impl Drop for Droppable {
            fn drop(&mut self) {
                COUNT.fetch_sub(1, core::sync::atomic::Ordering::Relaxed);
            }
        }

        static COUNT: core::sync::atomic::AtomicI32 = core::sync::atomic::AtomicI32::new(0);

        fn droppable_count() -> i32 {
            COUNT.load(core::sync::atomic::Ordering::Relaxed)
        }
    };
}
