mod name_registry;
