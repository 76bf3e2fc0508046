mod character_classifier_tests;
mod segmentation_policy_tests;
