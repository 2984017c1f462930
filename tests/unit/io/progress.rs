//! Tests for level and batch progress bars

#[cfg(test)]
mod tests {
    use gridpuzzle::io::progress::ProgressManager;

    // Tests a manager without a bar ignores updates
    // Verified by creating a bar on construction
    #[test]
    fn test_updates_without_bar() {
        let mut pm = ProgressManager::default();

        pm.update_level(3, 10);
        pm.image_done("castle");
        assert_eq!(pm.position(), None);
        pm.finish();
    }

    // Tests level bars track placed pieces
    // Verified by setting the position to the attempt count
    #[test]
    fn test_level_bar() {
        let mut pm = ProgressManager::new();
        pm.start_level("Frozen", 4);

        pm.update_level(1, 3);
        assert_eq!(pm.position(), Some(1));
        pm.update_level(4, 9);
        assert_eq!(pm.position(), Some(4));

        pm.finish();
        assert_eq!(pm.position(), None);
    }

    // Tests batch bars count sliced images and replace a level bar
    // Verified by keeping the previous bar on start_batch
    #[test]
    fn test_batch_bar() {
        let mut pm = ProgressManager::new();
        pm.start_level("Frozen", 4);
        pm.update_level(2, 2);

        pm.start_batch(3);
        assert_eq!(pm.position(), Some(0));
        pm.image_done("a");
        pm.image_done("b");
        assert_eq!(pm.position(), Some(2));

        pm.finish();
        pm.finish();
    }
}
